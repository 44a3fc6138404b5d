// SPDX-FileCopyrightText: 2025-2026 inform-rs contributors
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use inform::Dist;

#[test]
fn new_allocates_zeroed_support() {
    let d = Dist::new(3).unwrap();
    assert_eq!(d.len(), 3);
    assert_eq!(d.total(), 0);
    for i in 0..3 {
        assert_eq!(d.get(i), 0);
    }
    assert!(!d.is_valid());
}

#[test]
fn new_rejects_empty_support() {
    assert!(Dist::new(0).is_none());
}

#[test]
fn from_counts_copies_weights_verbatim() {
    let d = Dist::from_counts(&[1, 2, 3]).unwrap();
    assert_eq!(d.counts(), &[1, 2, 3]);
    assert_eq!(d.total(), 6);
    assert!(d.is_valid());
}

#[test]
fn from_counts_rejects_empty_sequence() {
    assert!(Dist::from_counts(&[]).is_none());
}

#[test]
fn from_counts_of_zeros_is_invalid_but_allocated() {
    let d = Dist::from_counts(&[0, 0]).unwrap();
    assert_eq!(d.len(), 2);
    assert!(!d.is_valid());
}

#[test]
fn infer_counts_observations() {
    let d = Dist::infer(&[0, 1, 1, 1]).unwrap();
    assert_eq!(d.len(), 2);
    assert_eq!(d.counts(), &[1, 3]);
    assert_eq!(d.total(), 4);
}

#[test]
fn infer_support_is_max_observation_plus_one() {
    let d = Dist::infer(&[5]).unwrap();
    assert_eq!(d.len(), 6);
    assert_eq!(d.counts(), &[0, 0, 0, 0, 0, 1]);
    assert_eq!(d.total(), 1);
}

#[test]
fn infer_rejects_bad_input() {
    assert!(Dist::infer(&[]).is_none());
    assert!(Dist::infer(&[0, -1, 2]).is_none());
}

#[test]
fn uniform_observes_each_symbol_once() {
    let d = Dist::uniform(4).unwrap();
    assert_eq!(d.counts(), &[1, 1, 1, 1]);
    assert_eq!(d.total(), 4);
    assert!(d.is_valid());
    assert!(Dist::uniform(0).is_none());
}

#[test]
fn clone_is_deep() {
    let d = Dist::from_counts(&[1, 2, 3]).unwrap();
    let mut copy = d.clone();
    assert_eq!(copy, d);
    copy.tick(0);
    assert_eq!(d.counts(), &[1, 2, 3]);
    assert_eq!(copy.counts(), &[2, 2, 3]);
}

#[test]
fn clone_from_overwrites_existing_distribution() {
    let a = Dist::from_counts(&[4, 0, 1]).unwrap();
    let mut b = Dist::uniform(5).unwrap();
    b.clone_from(&a);
    assert_eq!(b, a);
    assert_eq!(b.total(), 5);
}

#[test]
fn copy_of_clone_round_trips() {
    let a = Dist::infer(&[0, 2, 2, 1, 0]).unwrap();
    let mut b = a.clone();
    b.clone_from(&a);
    assert_eq!(b, a);
}
