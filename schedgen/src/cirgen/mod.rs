//! Generates C scheduler code.

use std::path::Path;

use itertools::iproduct;

use crate::cir::*;
use crate::codegen::Codegen;
use crate::package::{Package, PackageError};
use crate::roles::Datapath;
use crate::schedule::Schedule;

/// Name of the output cell array parameter.
const OUTPUT_IDENT: &str = "enabled";

impl Package {
    /// Generates C scheduler code at the given directory path.
    pub fn gen_c<P: AsRef<Path>>(&self, path_dir: P) -> Result<(), PackageError> {
        self.gen_artifact_files(&Cirgen, path_dir.as_ref())
    }
}

/// C scheduler generator.
#[derive(Default, Debug)]
pub struct Cirgen;

impl Codegen for Cirgen {
    type Artifact = Function;

    const EXTENSION: &'static str = "c";

    fn gen_schedule(&self, schedule: &Schedule) -> Function {
        let num = schedule.num_pairs();

        let params = (0..num)
            .map(|datapath| ParamDeclaration::scalar(Datapath(datapath).to_string()))
            .chain(::std::iter::once(ParamDeclaration::out_array(OUTPUT_IDENT.to_string())))
            .collect();

        // One cell per (port, datapath) pair, row-major.
        let body = iproduct!(0..num, 0..num)
            .map(|(port, datapath)| {
                Assign::new(
                    Expression::ident(OUTPUT_IDENT.to_string()).with_index(port * num + datapath),
                    gen_grant(schedule, port, datapath),
                )
            })
            .collect();

        Function { name: format!("sched{}", num), params, body }
    }
}

/// Builds the activity test of a pair: evaluates to zero iff the datapath is
/// the cyclic-priority match for the port under modulus `num`.
///
/// For a power-of-two modulus the remainder folds into a bitmask, which is
/// cheaper in hardware. Requires `num >= 1`.
pub fn gen_activity(num: usize, port: usize, datapath: usize) -> Expression {
    let input = Expression::ident(Datapath(datapath).to_string());
    let folded = if num.is_power_of_two() {
        Expression::binary(BinaryOp::BitAnd, input, Expression::number((num - 1).to_string()))
    } else {
        Expression::binary(BinaryOp::Mod, input, Expression::number(num.to_string()))
    };
    Expression::binary(BinaryOp::Xor, folded, Expression::number(port.to_string()))
}

/// Builds the grant condition of a cell: the pair's own activity test
/// matches while every strictly-higher-priority test does not, so among
/// simultaneously matching datapaths the lowest rank wins.
pub fn gen_grant(schedule: &Schedule, port: usize, datapath: usize) -> Expression {
    let num = schedule.num_pairs();
    let rank = schedule.priorities().rank(port, datapath);
    let own = schedule.priorities().order(port)[rank].datapath;

    let mut conjuncts = vec![Expression::unary(UnaryOp::Not, gen_activity(num, port, own.0))];
    for priority in (0..rank).rev() {
        let higher = schedule.priorities().order(port)[priority].datapath;
        conjuncts.push(gen_activity(num, port, higher.0).into_primary());
    }

    Expression::conjunction(conjuncts)
}
