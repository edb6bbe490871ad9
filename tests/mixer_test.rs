use mixcore::{BoundLabel, Liquid, MixError, Mixer, MAX_INGREDIENTS};

fn liquid(name: &str, ml: f64) -> Liquid {
    Liquid::new(name, 50.0, 50.0, 0.0, ml)
}

/// Checks the engine's standing guarantees: non-filler volumes fit the
/// container, and a filler's volume is exactly the truncated remainder.
fn assert_invariants(mixer: &Mixer) {
    let used = mixer.used_volume();
    assert!(
        used <= mixer.capacity() + 1e-9,
        "non-filler volumes ({}) exceed capacity ({})",
        used,
        mixer.capacity()
    );

    if let Some(id) = mixer.filler() {
        let expected = (((mixer.capacity() - used).max(0.0)) * 10.0).floor() / 10.0;
        assert_eq!(mixer.entry(id).unwrap().volume(), expected);
    }
}

#[test]
fn test_free_volume_drives_entry_bounds() {
    // Scenario: 30 + 20 ml in a 100 ml container leaves 50 ml of headroom,
    // so each entry could grow by exactly that much.
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    let b = mixer.add_ingredient(liquid("b", 20.0)).unwrap();

    assert_eq!(mixer.free_volume(), 50.0);
    assert_eq!(mixer.entry(a).unwrap().bound(), 80.0);
    assert_eq!(mixer.entry(b).unwrap().bound(), 70.0);
    assert_invariants(&mixer);
}

#[test]
fn test_toggled_filler_takes_what_siblings_leave() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    mixer.add_ingredient(liquid("b", 20.0)).unwrap();

    mixer.toggle_filler(a).unwrap();
    assert_eq!(mixer.entry(a).unwrap().volume(), 80.0);
    assert_invariants(&mixer);
}

#[test]
fn test_resize_rescales_proportionally() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    let b = mixer.add_ingredient(liquid("b", 20.0)).unwrap();

    mixer.set_capacity(200.0).unwrap();
    assert_eq!(mixer.entry(a).unwrap().volume(), 60.0);
    assert_eq!(mixer.entry(b).unwrap().volume(), 40.0);
    assert_invariants(&mixer);
}

#[test]
fn test_add_rejected_at_ingredient_limit() {
    let mut mixer = Mixer::new();
    for i in 0..MAX_INGREDIENTS {
        mixer
            .add_ingredient(liquid(&format!("i{}", i), 0.0))
            .unwrap();
    }

    let err = mixer.add_ingredient(liquid("extra", 0.0)).unwrap_err();
    assert!(matches!(err, MixError::IngredientLimit));
    assert_eq!(mixer.len(), MAX_INGREDIENTS);
}

#[test]
fn test_double_toggle_on_full_container_restores_volumes() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 80.0)).unwrap();
    let b = mixer.add_ingredient(liquid("b", 20.0)).unwrap();

    mixer.toggle_filler(a).unwrap();
    mixer.toggle_filler(a).unwrap();

    assert_eq!(mixer.filler(), None);
    assert_eq!(mixer.entry(a).unwrap().volume(), 80.0);
    assert_eq!(mixer.entry(b).unwrap().volume(), 20.0);
    assert_invariants(&mixer);
}

#[test]
fn test_cleared_filler_keeps_derived_volume() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    mixer.add_ingredient(liquid("b", 20.0)).unwrap();

    mixer.toggle_filler(a).unwrap();
    mixer.toggle_filler(a).unwrap();

    // The entry becomes independently editable again at its derived volume.
    assert_eq!(mixer.filler(), None);
    assert_eq!(mixer.entry(a).unwrap().volume(), 80.0);
    assert!(mixer.set_volume(a, 10.0).unwrap());
}

#[test]
fn test_resize_round_trip_stays_within_one_rounding_step() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    let b = mixer.add_ingredient(liquid("b", 20.0)).unwrap();
    let c = mixer.add_ingredient(liquid("c", 33.3)).unwrap();

    mixer.set_capacity(150.0).unwrap();
    mixer.set_capacity(100.0).unwrap();

    for (id, original) in [(a, 30.0), (b, 20.0), (c, 33.3)] {
        let volume = mixer.entry(id).unwrap().volume();
        assert!(
            (volume - original).abs() <= 0.1 + 1e-9,
            "{} drifted from {} to {}",
            id,
            original,
            volume
        );
    }
    assert_invariants(&mixer);
}

#[test]
fn test_edited_entry_keeps_its_bound_for_the_pass() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    let b = mixer.add_ingredient(liquid("b", 20.0)).unwrap();
    assert_eq!(mixer.entry(a).unwrap().bound(), 80.0);

    assert!(mixer.set_volume(a, 50.0).unwrap());

    // Siblings see the new free volume; the edited entry is not reclamped
    // against its own input until some other operation recomputes it.
    assert_eq!(mixer.entry(b).unwrap().bound(), 50.0);
    assert_eq!(mixer.entry(a).unwrap().bound(), 80.0);

    assert!(mixer.set_volume(b, 25.0).unwrap());
    assert_eq!(mixer.entry(a).unwrap().bound(), 75.0);
}

#[test]
fn test_bound_shows_full_when_no_headroom_left() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 60.0)).unwrap();
    let b = mixer.add_ingredient(liquid("b", 40.0)).unwrap();

    assert_eq!(mixer.bound_label(a).unwrap(), BoundLabel::Full);
    assert_eq!(mixer.bound_label(b).unwrap(), BoundLabel::Full);

    assert!(mixer.set_volume(b, 39.0).unwrap());
    assert_eq!(mixer.bound_label(a).unwrap(), BoundLabel::Ml(61.0));
}

#[test]
fn test_removing_filler_clears_filler_state_first() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    let b = mixer.add_ingredient(liquid("b", 20.0)).unwrap();

    mixer.toggle_filler(b).unwrap();
    mixer.remove_ingredient(b).unwrap();

    assert_eq!(mixer.filler(), None);
    assert_eq!(mixer.len(), 1);
    assert_eq!(mixer.entry(a).unwrap().volume(), 30.0);
    assert_invariants(&mixer);
}

#[test]
fn test_removing_last_entry_returns_to_empty_state() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    mixer.toggle_filler(a).unwrap();
    mixer.remove_ingredient(a).unwrap();

    assert!(mixer.is_empty());
    assert_eq!(mixer.filler(), None);
    assert_eq!(mixer.used_volume(), 0.0);
    assert_eq!(mixer.total_volume(), 0.0);
}

#[test]
fn test_total_volume_is_capacity_while_filler_set() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    mixer.add_ingredient(liquid("b", 20.0)).unwrap();
    assert_eq!(mixer.total_volume(), 50.0);

    mixer.toggle_filler(a).unwrap();
    assert_eq!(mixer.total_volume(), 100.0);
}

#[test]
fn test_unknown_ids_are_reported() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 30.0)).unwrap();
    mixer.remove_ingredient(a).unwrap();

    assert!(matches!(
        mixer.set_volume(a, 10.0),
        Err(MixError::UnknownIngredient(_))
    ));
    assert!(matches!(
        mixer.toggle_filler(a),
        Err(MixError::UnknownIngredient(_))
    ));
    assert!(matches!(
        mixer.remove_ingredient(a),
        Err(MixError::UnknownIngredient(_))
    ));
}

#[test]
fn test_invariants_hold_across_mixed_operation_sequence() {
    let mut mixer = Mixer::new();
    let a = mixer.add_ingredient(liquid("a", 12.3)).unwrap();
    let b = mixer.add_ingredient(liquid("b", 45.6)).unwrap();
    assert_invariants(&mixer);

    mixer.toggle_filler(b).unwrap();
    assert_invariants(&mixer);

    assert!(mixer.set_volume(a, 33.3).unwrap());
    assert_invariants(&mixer);

    mixer.set_capacity(250.0).unwrap();
    assert_invariants(&mixer);

    let c = mixer.add_ingredient(liquid("c", 10.0)).unwrap();
    assert_invariants(&mixer);

    mixer.toggle_filler(c).unwrap();
    assert_invariants(&mixer);

    mixer.remove_ingredient(b).unwrap();
    assert_invariants(&mixer);

    mixer.set_capacity(50.0).unwrap();
    assert_invariants(&mixer);
}
