//! Behavioral tests for the Scribble protocol generator.
//!
//! Verifies both synthesis strategies:
//! - role declarations cover one port and one datapath role per index
//! - generated text keeps its choice/or blocks balanced
//! - round-robin fragments nest one choice per priority rank
//! - the full-permutation tree enumerates exactly the N! bijections
//! - generation is deterministic and survives the N=0 boundary

use itertools::Itertools;
use schedgen::scr::GlobalStatement;
use schedgen::{ChoreographyMode, Codegen, Schedule, Scrgen};

/// Checks that every opened block is closed, scanning like a bracket
/// matcher over the rendered text.
fn assert_balanced(text: &str) {
    let mut depth = 0i64;
    for ch in text.chars() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                assert!(depth >= 0, "block closed before it was opened:\n{}", text);
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0, "unclosed block:\n{}", text);
}

/// Returns the deepest choice nesting within the statements.
fn nesting_depth(stmts: &[GlobalStatement]) -> usize {
    stmts
        .iter()
        .map(|stmt| match stmt {
            GlobalStatement::Choice { branches, .. } => {
                1 + branches.iter().map(|branch| nesting_depth(branch)).max().unwrap_or(0)
            }
            _ => 0,
        })
        .max()
        .unwrap_or(0)
}

/// Extracts the (port, datapath) pair of a `use<d>_<p>` decision message.
fn use_pair(stmt: &GlobalStatement) -> Option<(usize, usize)> {
    if let GlobalStatement::Message { label, .. } = stmt {
        let rest = label.strip_prefix("use")?;
        let (datapath, port) = rest.split_once('_')?;
        return Some((port.parse().unwrap(), datapath.parse().unwrap()));
    }
    None
}

/// Collects the complete port-to-datapath matching of every leaf branch.
fn collect_matchings(branch: &[GlobalStatement], acc: &[(usize, usize)], out: &mut Vec<Vec<(usize, usize)>>) {
    let mut acc = acc.to_vec();
    acc.extend(branch.iter().filter_map(use_pair));

    let nested = branch.iter().find_map(|stmt| match stmt {
        GlobalStatement::Choice { branches, .. } => Some(branches),
        _ => None,
    });
    match nested {
        Some(branches) => {
            for sub in branches {
                collect_matchings(sub, &acc, out);
            }
        }
        None => out.push(acc),
    }
}

#[test]
fn test_roles_interleave_ports_and_datapaths() {
    let module = Scrgen::new(ChoreographyMode::RoundRobin).gen_schedule(&Schedule::new(2));
    let roles = module.protocols[0].roles.iter().map(|role| role.to_string()).collect::<Vec<_>>();
    assert_eq!(roles, ["role p0", "role idx0", "role p1", "role idx1"]);
    assert!(module
        .to_string()
        .starts_with("module Sched;\n\nglobal protocol Sched2(role p0, role idx0, role p1, role idx1) {"));
}

#[test]
fn test_generated_blocks_stay_balanced() {
    for num in 1..=6 {
        for mode in [ChoreographyMode::RoundRobin, ChoreographyMode::FullPermutation] {
            assert_balanced(&Scrgen::new(mode).gen_schedule(&Schedule::new(num)).to_string());
        }
    }
}

#[test]
fn test_round_robin_fragments_nest_one_choice_per_rank() {
    for num in 1..=5 {
        let module = Scrgen::new(ChoreographyMode::RoundRobin).gen_schedule(&Schedule::new(num));
        let fragments = module.protocols[0]
            .body
            .iter()
            .filter(|stmt| matches!(stmt, GlobalStatement::Choice { .. }))
            .collect::<Vec<_>>();
        assert_eq!(fragments.len(), num);
        for fragment in fragments {
            assert_eq!(nesting_depth(&[(*fragment).clone()]), num);
        }
    }
}

#[test]
fn test_round_robin_sched2_renders_the_priority_chains() {
    let module = Scrgen::new(ChoreographyMode::RoundRobin).gen_schedule(&Schedule::new(2));

    let expected = r#"module Sched;

global protocol Sched2(role p0, role idx0, role p1, role idx1) {
    // Path 0
    choice at idx0 {
        use0_0() from idx0 to p0;
        T_0_0() from idx0 to idx1; // Propagate
    } or {
        off0_0() from idx0 to p0;
        F_0_0() from idx0 to idx1; // Propagate
        choice at idx1 {
            use1_0() from idx1 to p0;
        } or {
            off1_0() from idx1 to p0;
        }
    }
    // Path 1
    choice at idx1 {
        use1_1() from idx1 to p1;
        T_1_1() from idx1 to idx0; // Propagate
    } or {
        off1_1() from idx1 to p1;
        F_1_1() from idx1 to idx0; // Propagate
        choice at idx0 {
            use0_1() from idx0 to p1;
        } or {
            off0_1() from idx0 to p1;
        }
    }
}"#;
    assert_eq!(module.to_string(), expected);
}

#[test]
fn test_full_permutation_enumerates_every_bijection() {
    for num in 1..=4 {
        let module = Scrgen::new(ChoreographyMode::FullPermutation).gen_schedule(&Schedule::new(num));

        let mut matchings = Vec::new();
        collect_matchings(&module.protocols[0].body, &[], &mut matchings);

        let expected = (0..num)
            .permutations(num)
            .map(|perm| perm.into_iter().enumerate().collect::<Vec<_>>())
            .collect::<Vec<_>>();
        assert_eq!(matchings, expected);
    }
}

#[test]
fn test_full_permutation_sched2_renders_both_matchings() {
    let module = Scrgen::new(ChoreographyMode::FullPermutation).gen_schedule(&Schedule::new(2));

    let expected = r#"module Sched;

global protocol Sched2(role p0, role idx0, role p1, role idx1) {
    choice at p0 {
        use0_0() from idx0 to p0;
        off1_0() from idx1 to p0;
        pass0_1() from p0 to p1; // Hand-off
        choice at p1 {
            off0_1() from idx0 to p1;
            use1_1() from idx1 to p1;
        }
    } or {
        off0_0() from idx0 to p0;
        use1_0() from idx1 to p0;
        pass0_1() from p0 to p1; // Hand-off
        choice at p1 {
            use0_1() from idx0 to p1;
            off1_1() from idx1 to p1;
        }
    }
}"#;
    assert_eq!(module.to_string(), expected);
}

#[test]
fn test_empty_schedule_renders_empty_protocols() {
    for mode in [ChoreographyMode::RoundRobin, ChoreographyMode::FullPermutation] {
        let module = Scrgen::new(mode).gen_schedule(&Schedule::new(0));
        assert_eq!(module.to_string(), "module Sched;\n\nglobal protocol Sched0() {\n}");
    }
}

#[test]
fn test_generation_is_deterministic() {
    for num in [1usize, 3, 4] {
        for mode in [ChoreographyMode::RoundRobin, ChoreographyMode::FullPermutation] {
            let first = Scrgen::new(mode).gen_schedule(&Schedule::new(num)).to_string();
            let second = Scrgen::new(mode).gen_schedule(&Schedule::new(num)).to_string();
            assert_eq!(first, second);
        }
    }
}
