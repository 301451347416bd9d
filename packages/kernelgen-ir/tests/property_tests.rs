//! Property-based tests
//!
//! Invariants that should hold for ALL inputs:
//! - Canonicalization: repeating a request never adds nodes
//! - Sign normalization: no `+ -` / `- -`, every term kept, positive lead
//! - Naming: allocated names are unique and avoid user names

use kernelgen_ir::api::CodeBuilder;
use kernelgen_ir::config::NamingConfig;
use kernelgen_ir::features::arithmetic::{normalize, ChainOp, Term};
use kernelgen_ir::features::naming::{NameAllocator, NamingHint};
use kernelgen_ir::{Brackets, NodeId};
use proptest::prelude::*;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use std::collections::HashSet;

const OPERATIONS: [&str; 6] = ["+", "-", "*", "/", "max", ".dot"];

// ============================================================================
// QuickCheck Tests (simpler, faster)
// ============================================================================

#[quickcheck]
fn qc_temporaries_are_unique(reserved: Vec<u8>, count: u8) -> bool {
    let mut names = NameAllocator::new(&NamingConfig::default());
    let reserved: HashSet<String> = reserved.iter().map(|n| format!("temp{}", n)).collect();
    for name in &reserved {
        names.reserve(name);
    }

    let mut seen = HashSet::new();
    for _ in 0..count {
        let name = names.allocate(&NamingHint::Anonymous);
        if reserved.contains(&name) || !seen.insert(name) {
            return false;
        }
    }
    true
}

#[quickcheck]
fn qc_field_names_never_collide(indices: Vec<u8>) -> TestResult {
    if indices.is_empty() {
        return TestResult::discard();
    }

    let mut names = NameAllocator::new(&NamingConfig::default());
    let mut seen = HashSet::new();
    for index in indices {
        let name = names.allocate(&NamingHint::Field {
            parent: "v".to_string(),
            index: index as usize,
        });
        if !seen.insert(name) {
            return TestResult::failed();
        }
    }
    TestResult::passed()
}

#[quickcheck]
fn qc_phi_names_are_unique(requests: Vec<Option<bool>>) -> bool {
    let mut names = NameAllocator::new(&NamingConfig::default());
    let mut seen = HashSet::new();
    for request in requests {
        let requested = match request {
            Some(true) => Some("phi"),
            Some(false) => Some("sel"),
            None => None,
        };
        if !seen.insert(names.phi_name(requested)) {
            return false;
        }
    }
    true
}

// ============================================================================
// PropTest (more control over generation)
// ============================================================================

fn term_strategy() -> impl Strategy<Value = (bool, u8)> {
    (any::<bool>(), 0u8..26)
}

fn terms(signs: &[(bool, u8)]) -> Vec<Term> {
    signs.iter()
        .map(|&(negative, letter)| {
            let name = (b'a' + letter) as char;
            if negative {
                Term::atom(format!("-{}", name))
            } else {
                Term::atom(name.to_string())
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_chain_has_no_double_signs(
        signs in prop::collection::vec(term_strategy(), 2..8),
        subtract in any::<bool>(),
    ) {
        let op = if subtract { ChainOp::Subtract } else { ChainOp::Add };
        let chain = normalize(op, &terms(&signs));

        prop_assert!(!chain.text.contains("+ -"));
        prop_assert!(!chain.text.contains("- -"));
        if chain.negated {
            prop_assert!(chain.text.starts_with("-("));
        } else {
            prop_assert!(!chain.text.starts_with('-'));
        }
    }

    #[test]
    fn prop_chain_with_negative_products_has_no_double_signs(
        signs in prop::collection::vec(term_strategy(), 1..6),
        products in prop::collection::vec(0u8..26, 1..4),
        subtract in any::<bool>(),
    ) {
        let op = if subtract { ChainOp::Subtract } else { ChainOp::Add };
        let mut all = terms(&signs);
        for letter in products {
            let name = (b'a' + letter) as char;
            all.push(Term::new(format!("-{} * k", name), format!("(-{} * k)", name)));
        }
        let chain = normalize(op, &all);

        prop_assert!(!chain.text.contains("+ -"));
        prop_assert!(!chain.text.contains("- -"));
    }

    #[test]
    fn prop_chain_keeps_every_term(
        signs in prop::collection::vec(term_strategy(), 2..8),
        subtract in any::<bool>(),
    ) {
        let op = if subtract { ChainOp::Subtract } else { ChainOp::Add };
        let chain = normalize(op, &terms(&signs));

        let letters = chain.text.chars().filter(|c| c.is_ascii_lowercase()).count();
        prop_assert_eq!(letters, signs.len());
    }

    #[test]
    fn prop_repeated_requests_are_canonical(
        requests in prop::collection::vec((0usize..OPERATIONS.len(), 0usize..4, 0usize..4), 1..20),
    ) {
        let mut builder = CodeBuilder::new();
        let leaves: Vec<NodeId> = ["a", "b", "c", "d"]
            .iter()
            .map(|name| builder.scalar(name))
            .collect();

        let mut built = Vec::new();
        for &(op, left, right) in &requests {
            let id = builder.apply(OPERATIONS[op], &[leaves[left], leaves[right]]).unwrap();
            built.push(id);
        }

        let count = builder.identity_count();
        for (&(op, left, right), &id) in requests.iter().zip(&built) {
            let again = builder.apply(OPERATIONS[op], &[leaves[left], leaves[right]]).unwrap();
            prop_assert_eq!(again, id);
        }
        prop_assert_eq!(builder.identity_count(), count);
    }

    #[test]
    fn prop_rendering_is_stable_without_new_uses(
        ops in prop::collection::vec(0usize..OPERATIONS.len(), 1..10),
    ) {
        let mut builder = CodeBuilder::new();
        let mut current = builder.scalar("x");
        let y = builder.scalar("y");
        for op in ops {
            current = builder.apply(OPERATIONS[op], &[current, y]).unwrap();
        }

        let first = builder.render(current, Brackets::Suppress).unwrap();
        let second = builder.render(current, Brackets::Suppress).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(builder.assignments().is_empty());
    }
}
