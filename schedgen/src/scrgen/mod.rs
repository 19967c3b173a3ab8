//! Generates Scribble protocol code.
//!
//! Two interchangeable strategies produce the decision choreography: a
//! round-robin choice chain per port mirroring the arbiter's priority
//! rotation, and an exhaustive enumeration of every port-to-datapath
//! bijection.

use std::path::Path;

use crate::codegen::Codegen;
use crate::package::{Package, PackageError};
use crate::roles::{Datapath, Port};
use crate::schedule::Schedule;
use crate::scr::*;
use crate::some_or;

/// Module name shared by all generated protocols.
const MODULE_NAME: &str = "Sched";

impl Package {
    /// Generates Scribble protocol code at the given directory path.
    pub fn gen_scr<P: AsRef<Path>>(&self, path_dir: P, mode: ChoreographyMode) -> Result<(), PackageError> {
        self.gen_artifact_files(&Scrgen::new(mode), path_dir.as_ref())
    }
}

/// Choreography synthesis strategy.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoreographyMode {
    /// One nested choice chain per port, following its priority rotation.
    #[default]
    RoundRobin,

    /// Exhaustive enumeration of every port-to-datapath bijection.
    FullPermutation,
}

/// Scribble protocol generator.
#[derive(Default, Debug)]
pub struct Scrgen {
    mode: ChoreographyMode,
}

impl Scrgen {
    /// Creates new generator with the given mode.
    pub fn new(mode: ChoreographyMode) -> Self { Scrgen { mode } }
}

impl Codegen for Scrgen {
    type Artifact = Module;

    const EXTENSION: &'static str = "scr";

    fn gen_schedule(&self, schedule: &Schedule) -> Module {
        let num = schedule.num_pairs();

        let roles = (0..num)
            .flat_map(|index| [RoleDecl(Port(index).to_string()), RoleDecl(Datapath(index).to_string())])
            .collect();

        let body = match self.mode {
            ChoreographyMode::RoundRobin => gen_round_robin(schedule),
            ChoreographyMode::FullPermutation => gen_full_permutation(schedule),
        };

        Module {
            name: MODULE_NAME.to_string(),
            protocols: vec![Protocol { name: format!("{}{}", MODULE_NAME, num), roles, body }],
        }
    }
}

fn decision_label(used: bool, datapath: usize, port: usize) -> String {
    format!("{}{}_{}", if used { "use" } else { "off" }, datapath, port)
}

/// Builds the round-robin fragments, one nested choice chain per port.
fn gen_round_robin(schedule: &Schedule) -> Vec<GlobalStatement> {
    let mut stmts = Vec::new();
    for port in 0..schedule.num_pairs() {
        stmts.push(GlobalStatement::comment(format!("Path {}", port)));
        stmts.push(gen_priority_chain(schedule, port, 0));
    }
    stmts
}

/// Builds the choice of the given rank, nesting the next rank's choice
/// inside the reject branch.
fn gen_priority_chain(schedule: &Schedule, port: usize, rank: usize) -> GlobalStatement {
    let num = schedule.num_pairs();
    let datapath = schedule.priorities().order(port)[rank].datapath;

    let use_branch = gen_decision_branch(schedule, port, rank, true);
    let mut off_branch = gen_decision_branch(schedule, port, rank, false);
    if rank + 1 < num {
        off_branch.push(gen_priority_chain(schedule, port, rank + 1));
    }

    GlobalStatement::choice(datapath.to_string(), vec![use_branch, off_branch])
}

/// Builds one decision branch: the accept/reject message to the port, then
/// the propagation chain to every later datapath in the rotation.
fn gen_decision_branch(schedule: &Schedule, port: usize, rank: usize, used: bool) -> Vec<GlobalStatement> {
    let num = schedule.num_pairs();
    let connection = schedule.priorities().order(port)[rank];
    let datapath = connection.datapath;

    let mut stmts = vec![GlobalStatement::message(
        decision_label(used, datapath.0, port),
        datapath.to_string(),
        connection.port.to_string(),
    )];
    for chained in rank..num - 1 {
        let next = Datapath((port + chained + 1) % num);
        stmts.push(
            GlobalStatement::message(
                format!("{}_{}_{}", if used { "T" } else { "F" }, datapath.0, port),
                datapath.to_string(),
                next.to_string(),
            )
            .with_comment("Propagate".to_string()),
        );
    }
    stmts
}

/// Builds the exhaustive matching tree over the initial free index sets.
fn gen_full_permutation(schedule: &Schedule) -> Vec<GlobalStatement> {
    let free_ports = (0..schedule.num_pairs()).collect::<Vec<_>>();
    let free_datapaths = (0..schedule.num_pairs()).collect::<Vec<_>>();
    gen_matching_choice(schedule, &free_ports, &free_datapaths)
}

/// Builds the choice of the first free port over every free datapath, then
/// recurses into the shrunk sets after a hand-off to the next free port.
///
/// Each branch spells out the full use/off decision row of the port, over
/// all datapath indices rather than just the free ones. Contributes nothing
/// once either set is exhausted, which terminates the recursion.
fn gen_matching_choice(schedule: &Schedule, free_ports: &[usize], free_datapaths: &[usize]) -> Vec<GlobalStatement> {
    let (&port, rest_ports) = some_or!(free_ports.split_first(), return Vec::new());
    if free_datapaths.is_empty() {
        return Vec::new();
    }

    let mut branches = Vec::new();
    for (position, &chosen) in free_datapaths.iter().enumerate() {
        let mut branch = Vec::new();
        for datapath in 0..schedule.num_pairs() {
            branch.push(GlobalStatement::message(
                decision_label(datapath == chosen, datapath, port),
                Datapath(datapath).to_string(),
                Port(port).to_string(),
            ));
        }

        if let Some(&next) = rest_ports.first() {
            branch.push(
                GlobalStatement::message(
                    format!("pass{}_{}", port, next),
                    Port(port).to_string(),
                    Port(next).to_string(),
                )
                .with_comment("Hand-off".to_string()),
            );

            let mut rest_datapaths = free_datapaths.to_vec();
            rest_datapaths.remove(position);
            branch.extend(gen_matching_choice(schedule, rest_ports, &rest_datapaths));
        }

        branches.push(branch);
    }

    vec![GlobalStatement::choice(Port(port).to_string(), branches)]
}
