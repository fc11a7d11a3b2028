// tests/core.rs
use mana_idle::{
    Error, GameState, MAX_LEVEL, MULTIPLIER_STEP, ProducerId, PurchaseOutcome, TICKS_PER_SECOND,
};

fn product(st: &GameState) -> f64 {
    st.producers().iter().map(|p| p.mana_multiplier()).product()
}

/* ──────────────────────────────────────────────────────────────────────────
1) Accrual — one multiplier-second per 60 ticks
────────────────────────────────────────────────────────────────────────── */

#[test]
fn sixty_ticks_credit_one_multiplier_second() {
    let mut st = GameState::new();
    assert_eq!(st.total_multiplier(), 1.0);

    st.advance_by(u64::from(TICKS_PER_SECOND) - 1);
    assert_eq!(st.mana(), 0.0, "credited before the boundary");
    assert_eq!(st.tick_accumulator(), TICKS_PER_SECOND - 1);

    let report = st.advance();
    assert_eq!(report.credited, Some(1.0));
    assert_eq!(st.mana(), 1.0);
    assert_eq!(st.tick_accumulator(), 0, "accumulator must reset");
}

#[test]
fn credit_uses_multiplier_current_at_the_boundary() {
    let mut st = GameState::new();
    // Mana Crystal (level 5, 0.1 rev/s/level) turns once every ~120 ticks.
    // The credit at tick 120 runs before that tick's rotation, so the first
    // revolution only shows up in the credit at tick 180.
    st.advance_by(180);
    let crystal = st.producer(ProducerId::ManaCrystal);
    assert!((crystal.mana_multiplier() - 1.01).abs() < 1e-12, "mult = {}", crystal.mana_multiplier());
    assert!((st.mana() - 3.01).abs() < 1e-9, "mana = {}", st.mana());
}

/* ──────────────────────────────────────────────────────────────────────────
2) Purchase — success, insufficient funds, level cap, bad index
────────────────────────────────────────────────────────────────────────── */

#[test]
fn crystal_purchase_matches_reference_numbers() {
    let mut st = GameState::with_mana(3.0);
    let before = st.producer(ProducerId::ManaCrystal).clone();
    assert_eq!(before.cost(), 3.0);
    assert_eq!(before.level(), 5);

    let out = st.purchase(ProducerId::ManaCrystal);
    assert_eq!(out, PurchaseOutcome::Purchased { cost_paid: 3.0, new_level: 6 });

    let after = st.producer(ProducerId::ManaCrystal);
    assert_eq!(st.mana(), 0.0);
    assert_eq!(after.level(), 6);
    assert!((after.cost() - 3.45).abs() < 1e-12, "cost = {}", after.cost());
}

#[test]
fn later_producers_grow_by_twenty_percent() {
    let mut st = GameState::with_mana(50.0);
    assert!(st.purchase(ProducerId::ArcaneTower).is_purchased());
    let tower = st.producer(ProducerId::ArcaneTower);
    assert_eq!(tower.level(), 1);
    assert!((tower.cost() - 60.0).abs() < 1e-12);
    assert_eq!(st.mana(), 0.0);
}

#[test]
fn insufficient_funds_changes_nothing() {
    let mut st = GameState::with_mana(2.99);
    st.advance_by(37);
    let before = st.clone();

    for id in ProducerId::ALL {
        let out = st.purchase(id);
        assert!(
            matches!(out, PurchaseOutcome::InsufficientFunds { .. }),
            "{id:?} -> {out:?}"
        );
    }
    assert_eq!(st, before);
}

#[test]
fn max_level_purchase_is_a_no_op() {
    let mut st = GameState::with_mana(1e12);
    let start = st.producer(ProducerId::ManaCrystal).level();
    for _ in start..MAX_LEVEL {
        assert!(st.purchase(ProducerId::ManaCrystal).is_purchased());
    }
    assert_eq!(st.producer(ProducerId::ManaCrystal).level(), MAX_LEVEL);

    let before = st.clone();
    assert_eq!(st.purchase(ProducerId::ManaCrystal), PurchaseOutcome::MaxLevel);
    assert_eq!(st, before, "state changed on a capped purchase");
    assert!(st.snapshot().producer(ProducerId::ManaCrystal).maxed);
}

#[test]
fn purchase_index_rejects_unknown_producers() {
    let mut st = GameState::with_mana(3.0);
    assert_eq!(st.purchase_index(4), Err(Error::UnknownProducer(4)));
    assert_eq!(st.mana(), 3.0);
    assert!(st.purchase_index(0).is_ok_and(|o| o.is_purchased()));
}

/* ──────────────────────────────────────────────────────────────────────────
3) Rotation — one step per revolution, inert at level 0
────────────────────────────────────────────────────────────────────────── */

#[test]
fn crystal_gains_about_a_tenth_in_twenty_seconds() {
    let mut st = GameState::new();
    let revs = st.advance_by(1200);
    let mult = st.producer(ProducerId::ManaCrystal).mana_multiplier();

    // 0.5 rev/s → one revolution per ~120 ticks.
    assert!((9..=10).contains(&revs), "revs = {revs}");
    assert!((mult - (1.0 + MULTIPLIER_STEP * revs as f64)).abs() < 1e-9);
    assert!((mult - 1.10).abs() <= 0.0100001, "mult = {mult}");
}

#[test]
fn idle_producers_stay_inert() {
    let mut st = GameState::new();
    st.advance_by(5_000);
    for id in [ProducerId::ArcaneTower, ProducerId::LeyLineNode, ProducerId::ElderArtifact] {
        let p = st.producer(id);
        assert_eq!(p.level(), 0);
        assert_eq!(p.rotation_angle(), 0.0);
        assert_eq!(p.mana_multiplier(), 1.0);
    }
}

#[test]
fn angles_stay_within_one_turn() {
    let mut st = GameState::with_mana(1e12);
    for id in ProducerId::ALL {
        for _ in 0..40 {
            let _ = st.purchase(id);
        }
    }
    for _ in 0..3_000 {
        st.advance();
        for p in st.producers() {
            let a = p.rotation_angle();
            assert!((0.0..std::f64::consts::TAU).contains(&a), "{:?} angle {a}", p.id());
        }
    }
}

/* ──────────────────────────────────────────────────────────────────────────
4) Aggregate multiplier and read-only views
────────────────────────────────────────────────────────────────────────── */

#[test]
fn total_tracks_product_after_every_operation() {
    let mut st = GameState::with_mana(5_000.0);
    for t in 0..4_000u32 {
        if t % 97 == 0 {
            let _ = st.purchase(ProducerId::ALL[(t as usize / 97) % ProducerId::COUNT]);
            assert!((st.total_multiplier() - product(&st)).abs() < 1e-12);
        }
        st.advance();
        assert!(
            (st.total_multiplier() - product(&st)).abs() < 1e-12,
            "tick {t}: cached {} vs product {}",
            st.total_multiplier(),
            product(&st)
        );
    }
}

#[test]
fn snapshot_is_idempotent() {
    let mut st = GameState::with_mana(100.0);
    st.advance_by(333);
    let _ = st.purchase(ProducerId::ArcaneTower);
    assert_eq!(st.snapshot(), st.snapshot());
    assert_eq!(st.snapshot().multiplier_line(), st.snapshot().multiplier_line());
}

#[test]
fn display_lines_match_hud_format() {
    let st = GameState::new();
    let snap = st.snapshot();
    assert_eq!(snap.mana_line(), "Mana: 0.00");
    assert_eq!(snap.multiplier_line(), "1.00 x 1.00 x 1.00 x 1.00 = 1.00/sec");
    assert_eq!(snap.rate_hundredths, 100);

    let crystal = snap.producer(ProducerId::ManaCrystal);
    assert_eq!(crystal.name, "Mana Crystal");
    assert_eq!(crystal.level, 5);
    assert!(!crystal.affordable);
}

#[test]
fn snapshot_serializes_to_json() {
    let snap = GameState::new().snapshot();
    let v = serde_json::to_value(&snap).expect("serialize");
    assert_eq!(v["producers"][1]["name"], "Arcane Tower");
    assert_eq!(v["producers"][0]["id"], "ManaCrystal");
    assert_eq!(v["total_multiplier"], 1.0);
}
