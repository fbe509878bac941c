//! The sweep coordinator: fan the tuple grid out across execution
//! contexts and fan the results back in.
//!
//! Partitioning is static round-robin by tuple index modulo thread count.
//! Each context recompiles the strategy from the same source text with
//! its own randomness seed, processes its partition sequentially, and
//! reports completion or failure over a channel. The run succeeds only if
//! every context succeeds; the first failure discards all other work.
//! Nothing persists across runs — every run regenerates the grid and
//! recompiles the strategy.

use std::sync::mpsc;
use std::thread;

use crate::config::SimulationConfig;
use crate::error::SweepError;
use crate::grid::generate_tuples;
use crate::model::{ParameterRange, ParameterTuple, SimulationResult};
use crate::strategy::{Strategy, compile_check};
use crate::trial::run_trial;

/// Run the Monte Carlo trial for every tuple in the grid spanned by
/// `ranges`, using up to `config.num_threads` execution contexts.
///
/// Configuration and compile faults are rejected before any thread is
/// spawned, so a malformed script never wastes worker startup. Result
/// order is generation order within a context and context order across
/// contexts.
pub fn run_sweep(
    ranges: &[ParameterRange],
    source: &str,
    config: &SimulationConfig,
) -> Result<Vec<SimulationResult>, SweepError> {
    config.validate()?;
    compile_check(source)?;

    let tuples = generate_tuples(ranges)?;
    let total = tuples.len();
    if total == 0 {
        return Ok(Vec::new());
    }

    let names: Vec<String> = ranges.iter().map(|r| r.name.clone()).collect();
    let num_threads = config.num_threads;

    tracing::info!(
        tuples = total,
        threads = num_threads,
        experiments = config.num_experiments,
        rounds = config.num_rounds,
        "starting sweep"
    );

    let mut partitions: Vec<Vec<ParameterTuple>> = vec![Vec::new(); num_threads];
    for (idx, tuple) in tuples.into_iter().enumerate() {
        partitions[idx % num_threads].push(tuple);
    }

    let (tx, rx) = mpsc::channel::<(usize, Result<Vec<SimulationResult>, SweepError>)>();
    let mut collected: Vec<Option<Vec<SimulationResult>>> = vec![None; num_threads];
    let mut handles = Vec::with_capacity(num_threads);
    let mut first_error: Option<SweepError> = None;
    let mut pending = 0usize;

    for (context, partition) in partitions.into_iter().enumerate() {
        if partition.is_empty() {
            // An empty partition completes immediately, no thread needed
            collected[context] = Some(Vec::new());
            continue;
        }

        let tx = tx.clone();
        let source = source.to_owned();
        let names = names.clone();
        let config = config.clone();

        let spawn = thread::Builder::new()
            .name(format!("sweep-{context}"))
            .spawn(move || {
                let outcome = run_partition(&source, &names, &config, partition, context as u64);
                let _ = tx.send((context, outcome));
            });

        match spawn {
            Ok(handle) => {
                handles.push(handle);
                pending += 1;
            }
            Err(e) => {
                first_error = Some(SweepError::Worker(format!(
                    "failed to start context {context}: {e}"
                )));
                break;
            }
        }
    }
    drop(tx);

    // Await completion or failure from every spawned context,
    // short-circuiting on the first failure.
    if first_error.is_none() {
        while pending > 0 {
            match rx.recv() {
                Ok((context, Ok(results))) => {
                    collected[context] = Some(results);
                    pending -= 1;
                }
                Ok((_, Err(e))) => {
                    first_error = Some(e);
                    break;
                }
                Err(_) => {
                    // All senders gone with reports outstanding: a
                    // context died without reporting
                    break;
                }
            }
        }
    }

    // Every work handle is released, on all exit paths
    for handle in handles {
        let _ = handle.join();
    }

    if let Some(e) = first_error {
        tracing::warn!(error = %e, "sweep failed");
        return Err(e);
    }

    let mut merged = Vec::with_capacity(total);
    for (context, slot) in collected.into_iter().enumerate() {
        match slot {
            Some(results) => merged.extend(results),
            None => {
                return Err(SweepError::Worker(format!(
                    "context {context} terminated without reporting"
                )));
            }
        }
    }

    tracing::info!(results = merged.len(), "sweep complete");
    Ok(merged)
}

/// Sequential trial loop for one context's partition.
///
/// Compiles a fresh strategy instance — contexts never share a compiled
/// closure or RNG — then runs every assigned tuple in generation order.
fn run_partition(
    source: &str,
    names: &[String],
    config: &SimulationConfig,
    partition: Vec<ParameterTuple>,
    seed: u64,
) -> Result<Vec<SimulationResult>, SweepError> {
    let strategy = Strategy::compile(source, names, seed)?;

    let mut results = Vec::with_capacity(partition.len());
    for tuple in &partition {
        results.push(run_trial(&strategy, tuple, config)?);
    }
    Ok(results)
}
