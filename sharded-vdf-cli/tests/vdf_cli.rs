// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use assert_cmd::Command;
use regex::Regex;

#[test]
fn integration_test_vdf_run() {
    let result = Command::cargo_bin("vdf-cli")
        .unwrap()
        .arg("run")
        .arg("--x")
        .arg("12345")
        .arg("--iterations")
        .arg("16")
        .ok();
    assert!(result.is_ok());

    let expected = Regex::new(
        r"(?s)Trapdoor output: [0-9]+\nTrapdoor proof:  1\nTrapdoor time: .+\nTrapdoor verification: true\nParallel output: 90\nParallel proof:  0\nParallel time: .+\nParallel verification: true\n$",
    )
    .unwrap();
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    assert!(expected.is_match(&output));
}

#[test]
fn integration_test_vdf_parallel() {
    let result = Command::cargo_bin("vdf-cli")
        .unwrap()
        .arg("parallel")
        .arg("--x")
        .arg("12345")
        .arg("--iterations")
        .arg("16")
        .arg("--block-width")
        .arg("2")
        .arg("--parallelism")
        .arg("2")
        .ok();
    assert!(result.is_ok());

    let expected = Regex::new(r"^Output: 90\nProof:  0\nEncoded: 015a00\nTime: .+\n$").unwrap();
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    assert!(expected.is_match(&output));
}

#[test]
fn integration_test_vdf_verify() {
    let result = Command::cargo_bin("vdf-cli")
        .unwrap()
        .arg("verify")
        .arg("--x")
        .arg("12345")
        .arg("--iterations")
        .arg("16")
        .arg("--output")
        .arg("90")
        .arg("--proof")
        .arg("0")
        .ok();
    assert!(result.is_ok());

    let expected = "Verified: true\n";
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    assert_eq!(expected, output);
}

#[test]
fn integration_test_vdf_hash() {
    let result = Command::cargo_bin("vdf-cli")
        .unwrap()
        .arg("hash")
        .arg("--x")
        .arg("0")
        .ok();
    assert!(result.is_ok());

    let expected = "Output: 102987336249554097029535212322581322789799900648198034993379397001115665086549\n";
    let output = String::from_utf8(result.unwrap().stdout).unwrap();
    assert_eq!(expected, output);
}

#[test]
fn integration_test_vdf_malformed_input() {
    let result = Command::cargo_bin("vdf-cli")
        .unwrap()
        .arg("run")
        .arg("--x")
        .arg("not-a-number")
        .arg("--iterations")
        .arg("16")
        .ok();
    assert!(result.is_err());
}
