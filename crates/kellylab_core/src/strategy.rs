//! Strategy compilation: turning user source text into a callable
//! numeric function.
//!
//! Strategies are rhai scripts with implicit last-expression return. The
//! interpreter is narrowly scoped: parameter bindings, arithmetic and
//! math primitives, conditionals, and a private randomness source — no
//! ambient I/O. The script author and operator share a trust domain, so
//! nothing guards against unbounded loops.
//!
//! Compilation is eager and happens once per execution context; contexts
//! never share an engine, an AST, or randomness state.

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rhai::{AST, Dynamic, Engine, Scope};

use crate::error::{CompileError, SweepError};

/// A compiled strategy function bound to one execution context.
///
/// Holds its own interpreter and RNG, so it is deliberately neither
/// `Send` nor `Sync`: every context compiles its own instance from the
/// shared source text.
pub struct Strategy {
    engine: Engine,
    ast: AST,
    param_names: Vec<String>,
}

impl Strategy {
    /// Compile `source` eagerly, binding the declared parameter names in
    /// order and seeding the context-private randomness source.
    pub fn compile(
        source: &str,
        param_names: &[String],
        seed: u64,
    ) -> Result<Self, CompileError> {
        let mut engine = Engine::new();
        let rng = Rc::new(RefCell::new(SmallRng::seed_from_u64(seed)));

        {
            let rng = rng.clone();
            engine.register_fn("random", move || -> f64 { rng.borrow_mut().random::<f64>() });
        }
        {
            let rng = rng.clone();
            engine.register_fn("random_normal", move |mean: f64, std_dev: f64| -> f64 {
                match Normal::new(mean, std_dev) {
                    Ok(dist) => dist.sample(&mut *rng.borrow_mut()),
                    Err(_) => f64::NAN,
                }
            });
        }

        let ast = engine
            .compile(source)
            .map_err(|e| CompileError::new(e.to_string()))?;

        Ok(Self {
            engine,
            ast,
            param_names: param_names.to_vec(),
        })
    }

    /// Invoke the strategy with parameter values in declared order,
    /// returning one multiplier.
    ///
    /// Numeric results (float or int) come back as `f64`. A non-numeric
    /// result maps to NaN — the trial runner clamps it to `0` (ruin)
    /// rather than treating it as an error. A raised script error aborts
    /// the trial and, with it, the whole run.
    pub fn evaluate(&self, values: &[f64]) -> Result<f64, SweepError> {
        let mut scope = Scope::new();
        for (name, value) in self.param_names.iter().zip(values) {
            scope.push(name.clone(), *value);
        }

        let out = self
            .engine
            .eval_ast_with_scope::<Dynamic>(&mut scope, &self.ast)
            .map_err(|e| SweepError::Strategy(e.to_string()))?;

        if let Ok(f) = out.clone().as_float() {
            Ok(f)
        } else if let Ok(i) = out.as_int() {
            Ok(i as f64)
        } else {
            Ok(f64::NAN)
        }
    }

    pub fn param_names(&self) -> &[String] {
        &self.param_names
    }
}

/// Synchronous pass/fail compile check, usable before any worker is
/// dispatched.
pub fn compile_check(source: &str) -> Result<(), CompileError> {
    Engine::new()
        .compile(source)
        .map(|_| ())
        .map_err(|e| CompileError::new(e.to_string()))
}
