// Copyright (c) 2022, Mysten Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use num_bigint::BigUint;
use sharded_vdf::bigint_utils::parse_integer;
use sharded_vdf::hash::hash_to_group;
use sharded_vdf::math::hash_prime::hash_prime_default;
use sharded_vdf::params::{DEFAULT_BLOCK_WIDTH, DEFAULT_PARALLELISM};
use sharded_vdf::vdf::parallel::ParallelVDF;
use sharded_vdf::vdf::trapdoor::TrapdoorVDF;
use sharded_vdf::vdf::verifier;
use sharded_vdf::vdf::Evaluation;
use sharded_vdf::{ParameterSet, VdfError};
use std::io::{Error, ErrorKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "vdf-cli")]
#[command(about = "Verifiable delay function with a trapdoor evaluator and a sharded table-based evaluator", long_about = None)]
enum Command {
    /// Run setup, evaluate with both evaluators and verify both results.
    Run(RunArguments),

    /// Compute VDF output and proof using the trapdoor.
    Trapdoor(TrapdoorArguments),

    /// Compute VDF output and proof using the precomputed table.
    Parallel(ParallelArguments),

    /// Verify an output and proof.
    Verify(VerifyArguments),

    /// Hash an integer to a group element.
    Hash(HashArguments),

    /// Derive the prime challenge for a group element and an output.
    Challenge(ChallengeArguments),
}

#[derive(Parser, Clone)]
struct ParameterArguments {
    /// The generator. It is also used as the group modulus.
    #[clap(long, default_value = "2")]
    generator: String,

    /// The modulus of the precomputed table.
    #[clap(long, default_value = "101")]
    table_modulus: String,

    /// Bit width of each exponent block.
    #[clap(long, default_value_t = DEFAULT_BLOCK_WIDTH)]
    block_width: u64,

    /// Number of concurrent shards.
    #[clap(long, default_value_t = DEFAULT_PARALLELISM)]
    parallelism: u64,
}

#[derive(Parser, Clone)]
struct RunArguments {
    /// The decimal input to the VDF.
    #[clap(long)]
    x: String,

    /// The number of iterations.
    #[clap(long)]
    iterations: String,

    /// The trapdoor secret. Defaults to the table modulus.
    #[clap(long)]
    secret: Option<String>,

    #[clap(flatten)]
    parameters: ParameterArguments,
}

#[derive(Parser, Clone)]
struct TrapdoorArguments {
    /// The decimal input to the VDF.
    #[clap(long)]
    x: String,

    /// The number of iterations.
    #[clap(long)]
    iterations: String,

    /// The trapdoor secret.
    #[clap(long)]
    secret: String,

    #[clap(flatten)]
    parameters: ParameterArguments,
}

#[derive(Parser, Clone)]
struct ParallelArguments {
    /// The decimal input to the VDF.
    #[clap(long)]
    x: String,

    /// The number of iterations.
    #[clap(long)]
    iterations: String,

    #[clap(flatten)]
    parameters: ParameterArguments,
}

#[derive(Parser, Clone)]
struct VerifyArguments {
    /// The decimal input to the VDF.
    #[clap(long)]
    x: String,

    /// The number of iterations.
    #[clap(long)]
    iterations: String,

    /// The output of the VDF.
    #[clap(short, long)]
    output: String,

    /// The proof of the correctness of the VDF output.
    #[clap(short, long)]
    proof: String,

    /// The group modulus.
    #[clap(long, default_value = "2")]
    modulus: String,
}

#[derive(Parser, Clone)]
struct HashArguments {
    /// The decimal integer to hash.
    #[clap(long)]
    x: String,
}

#[derive(Parser, Clone)]
struct ChallengeArguments {
    /// The group element.
    #[clap(long)]
    g: String,

    /// The output of the VDF.
    #[clap(long)]
    y: String,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match execute(Command::parse()) {
        Ok(res) => {
            println!("{}", res);
            std::process::exit(exitcode::OK);
        }
        Err(e) => {
            println!("Error: {}", e);
            std::process::exit(exitcode::DATAERR);
        }
    }
}

fn to_io_error(error: VdfError) -> Error {
    let kind = match error {
        VdfError::MalformedInteger(_) | VdfError::InvalidParameters(_) => ErrorKind::InvalidInput,
        VdfError::PrimeSearchExhausted(_) | VdfError::NoInverseExists => ErrorKind::Other,
    };
    Error::new(kind, error.to_string())
}

fn parse(s: &str) -> Result<BigUint, Error> {
    parse_integer(s).map_err(to_io_error)
}

fn parse_iterations(s: &str) -> Result<u64, Error> {
    u64::try_from(parse(s)?)
        .map_err(|_| to_io_error(VdfError::MalformedInteger(s.to_string())))
}

fn setup(arguments: &ParameterArguments, iterations: u64) -> Result<ParameterSet, Error> {
    ParameterSet::setup(
        parse(&arguments.generator)?,
        parse(&arguments.table_modulus)?,
        iterations,
        arguments.block_width,
        arguments.parallelism,
    )
    .map_err(to_io_error)
}

fn format_evaluation(evaluation: &Evaluation) -> Result<String, Error> {
    let encoded = bcs::to_bytes(evaluation)
        .map_err(|_| Error::new(ErrorKind::Other, "Failed to encode the evaluation."))?;
    Ok(format!(
        "Output: {}\nProof:  {}\nEncoded: {}\nTime: {:?}",
        evaluation.output,
        evaluation.proof,
        hex::encode(encoded),
        evaluation.elapsed
    ))
}

fn execute(cmd: Command) -> Result<String, Error> {
    match cmd {
        Command::Run(arguments) => {
            let x = parse(&arguments.x)?;
            let iterations = parse_iterations(&arguments.iterations)?;
            let secret = match &arguments.secret {
                Some(secret) => parse(secret)?,
                None => parse(&arguments.parameters.table_modulus)?,
            };
            let parameters = setup(&arguments.parameters, iterations)?;

            let trapdoor = TrapdoorVDF::new(&parameters, secret)
                .and_then(|vdf| vdf.evaluate_timed(&x))
                .map_err(to_io_error)?;
            let trapdoor_verifies = parameters
                .verify(&x, &trapdoor.output, &trapdoor.proof)
                .map_err(to_io_error)?;

            let parallel = ParallelVDF::new(&parameters).evaluate_timed(&x);
            let parallel_verifies = parameters
                .verify(&x, &parallel.output, &parallel.proof)
                .map_err(to_io_error)?;

            Ok(format!(
                "Trapdoor output: {}\nTrapdoor proof:  {}\nTrapdoor time: {:?}\nTrapdoor verification: {}\nParallel output: {}\nParallel proof:  {}\nParallel time: {:?}\nParallel verification: {}",
                trapdoor.output,
                trapdoor.proof,
                trapdoor.elapsed,
                trapdoor_verifies,
                parallel.output,
                parallel.proof,
                parallel.elapsed,
                parallel_verifies,
            ))
        }

        Command::Trapdoor(arguments) => {
            let x = parse(&arguments.x)?;
            let iterations = parse_iterations(&arguments.iterations)?;
            let parameters = setup(&arguments.parameters, iterations)?;
            let evaluation = TrapdoorVDF::new(&parameters, parse(&arguments.secret)?)
                .and_then(|vdf| vdf.evaluate_timed(&x))
                .map_err(to_io_error)?;
            format_evaluation(&evaluation)
        }

        Command::Parallel(arguments) => {
            let x = parse(&arguments.x)?;
            let iterations = parse_iterations(&arguments.iterations)?;
            let parameters = setup(&arguments.parameters, iterations)?;
            let evaluation = ParallelVDF::new(&parameters).evaluate_timed(&x);
            format_evaluation(&evaluation)
        }

        Command::Verify(arguments) => {
            let verifies = verifier::verify(
                &parse(&arguments.modulus)?,
                &parse(&arguments.x)?,
                &parse(&arguments.output)?,
                &parse(&arguments.proof)?,
                parse_iterations(&arguments.iterations)?,
            )
            .map_err(to_io_error)?;

            let mut result = "Verified: ".to_string();
            result.push_str(&verifies.to_string());
            Ok(result)
        }

        Command::Hash(arguments) => {
            let output = hash_to_group(&parse(&arguments.x)?);
            let mut result = "Output: ".to_string();
            result.push_str(&output.to_string());
            Ok(result)
        }

        Command::Challenge(arguments) => {
            let challenge = hash_prime_default(&parse(&arguments.g)?, &parse(&arguments.y)?)
                .map_err(to_io_error)?;
            let mut result = "Challenge: ".to_string();
            result.push_str(&challenge.to_string());
            Ok(result)
        }
    }
}
