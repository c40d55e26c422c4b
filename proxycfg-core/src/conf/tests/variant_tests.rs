use crate::conf::types::{CheckerKind, CheckerVariant};
use crate::conf::variant::{VariantSlot, resolve};
use pretty_assertions::assert_eq;
use std::collections::BTreeMap;

fn mysql(username: &str) -> CheckerVariant {
    CheckerVariant::MySql {
        username: username.to_string(),
    }
}

fn redis(password: &str) -> CheckerVariant {
    CheckerVariant::Redis {
        password: password.to_string(),
    }
}

#[test]
fn resolve_picks_the_matching_candidate() {
    // Arrange
    let candidates = BTreeMap::from([(CheckerKind::Redis, redis("pw"))]);

    // Act
    let resolved = resolve(CheckerKind::Redis, &candidates, CheckerKind::Tcp);

    // Assert
    assert_eq!(resolved, (CheckerKind::Redis, redis("pw")));
}

#[test]
fn resolve_falls_back_to_the_empty_default() {
    // Arrange
    let candidates = BTreeMap::from([(CheckerKind::Redis, redis("pw"))]);

    // Act
    let resolved = resolve(CheckerKind::MySql, &candidates, CheckerKind::Tcp);

    // Assert
    assert_eq!(resolved, (CheckerKind::Tcp, CheckerVariant::Tcp));
}

#[test]
fn orphans_are_candidates_off_the_active_tag() {
    // Arrange
    let slot = VariantSlot::with_candidates(CheckerKind::MySql, [mysql("admin"), redis("pw")]);

    // Act
    let orphans = slot.orphans();

    // Assert
    assert_eq!(orphans, vec![CheckerKind::Redis]);
}

#[test]
fn changing_the_discriminator_starts_empty() {
    // Arrange
    let mut slot = VariantSlot::with_candidates(CheckerKind::MySql, [mysql("admin")]);

    // Act
    slot.on_discriminator_change(CheckerKind::Redis);

    // Assert
    assert_eq!(slot.active(), CheckerKind::Redis);
    assert_eq!(slot.candidates().cloned().collect::<Vec<_>>(), vec![redis("")]);
    assert!(slot.orphans().is_empty());
}

#[test]
fn reselecting_the_active_tag_keeps_its_payload() {
    // Arrange
    let mut slot = VariantSlot::with_candidates(CheckerKind::MySql, [mysql("admin"), redis("pw")]);

    // Act
    slot.on_discriminator_change(CheckerKind::MySql);

    // Assert
    assert_eq!(slot.get(CheckerKind::MySql), Some(&mysql("admin")));
    assert!(!slot.contains(CheckerKind::Redis));
}

#[test]
fn new_slot_holds_only_the_empty_payload() {
    // Act
    let slot = VariantSlot::<CheckerVariant>::new(CheckerKind::Atcp);

    // Assert
    assert_eq!(slot.resolve(CheckerKind::Tcp), (CheckerKind::Atcp, CheckerVariant::Atcp));
}
