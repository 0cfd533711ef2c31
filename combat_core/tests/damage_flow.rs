//! Integration test: champion curve + loadout -> stats -> parsed ability -> mitigated damage

use combat_core::{
    ability::{parse_value, ScalingTerm},
    combat::DamageReport,
    config::{default_champion_curves, default_item_table},
    damage::{resolve, resolve_ability, resolve_auto_attack},
    stat_block::{compute_stats, ComputedStats},
    types::{DamageType, ScalingStat},
    BaseAttributeCurve, ItemStatTable, ItemStats, SupplementaryStats,
};
use serde_json::json;

fn bare_attacker() -> ComputedStats {
    ComputedStats::default()
}

#[test]
fn test_auto_attack_against_hundred_armor() {
    let attacker = ComputedStats {
        attack_damage: 100.0,
        ..Default::default()
    };
    let target = ComputedStats::with_defenses(2000.0, 100.0, 0.0);

    let result = resolve_auto_attack(&attacker, 18, &target);
    assert!((result.mitigated_damage - 50.0).abs() < f64::EPSILON);
}

#[test]
fn test_ability_against_fifty_mr() {
    let q = parse_value(&json!({
        "format": "formula",
        "id": "TestQ",
        "damage_type": "magic",
        "data_values": [{ "name": "BaseDamage", "values": [80] }],
        "base_damage": "BaseDamage",
        "calculations": [{ "stat": 0, "coefficient": 0.6 }]
    }));
    let attacker = ComputedStats {
        ability_power: 200.0,
        ..Default::default()
    };
    let target = ComputedStats::with_defenses(2000.0, 0.0, 50.0);

    let result = resolve_ability(&q, 1, &attacker, 18, &target);
    assert!((result.raw_damage - 200.0).abs() < 1e-9);
    assert!((result.mitigated_damage - 133.0).abs() < f64::EPSILON);
}

#[test]
fn test_effective_armor_example() {
    // 50 armor, 50% pen -> 25, minus 18 lethality at 18 -> 7
    let attacker = ComputedStats {
        lethality: 18.0,
        armor_pen_percent: 0.5,
        ..Default::default()
    };
    let target = ComputedStats::with_defenses(2000.0, 50.0, 0.0);
    let damage = resolve(107.0, DamageType::Physical, &attacker, 18, &target);
    assert!((damage - 100.0).abs() < f64::EPSILON);

    // 25 lethality exactly removes the remaining 25 armor
    let attacker = ComputedStats {
        lethality: 25.0,
        armor_pen_percent: 0.5,
        ..Default::default()
    };
    let damage = resolve(107.0, DamageType::Physical, &attacker, 18, &target);
    assert!((damage - 107.0).abs() < f64::EPSILON);
}

#[test]
fn test_true_damage_is_only_rounded() {
    let target = ComputedStats::with_defenses(2000.0, 500.0, 500.0);
    let damage = resolve(123.4, DamageType::True, &bare_attacker(), 1, &target);
    assert!((damage - 123.0).abs() < f64::EPSILON);
}

#[test]
fn test_armor_pen_clamp_from_two_items() {
    let mut table = ItemStatTable::new();
    for id in ["pen_a", "pen_b"] {
        table.insert_supplementary(
            id,
            SupplementaryStats {
                armor_pen_percent: 0.6,
                ..Default::default()
            },
        );
    }
    let curves = default_champion_curves();
    let stats = compute_stats(&curves["Jinx"], 11, ["pen_a", "pen_b"], &table);
    assert!((stats.armor_pen_percent - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_ap_amplifier_from_bundled_items() {
    let mut table = default_item_table();
    table.insert(
        "big_rod",
        ItemStats::new("Test Rod").with_stat("FlatMagicDamageMod", 270.0),
    );
    let curves = default_champion_curves();
    let annie = &curves["Annie"];

    // 270 + 130 = 400 summed AP
    let with_cap = compute_stats(annie, 9, ["big_rod", "3089"], &table);
    assert!((with_cap.ability_power - 540.0).abs() < 1e-9);

    let loadout = ["big_rod", "1058", "1052", "1052", "1052", "1052", "1052"];
    let without_cap = compute_stats(annie, 9, loadout, &table);
    // 270 + 60 + 5 * 20 = 430, no amplifier
    assert!((without_cap.ability_power - 430.0).abs() < 1e-9);
}

#[test]
fn test_crit_amplifier_item_raises_crit_multiplier() {
    let items = default_item_table();
    // 35 base + 65 from the amplifier item = 100 AD
    let curve = BaseAttributeCurve {
        attack_damage: 35.0,
        ..Default::default()
    };
    let target = ComputedStats::with_defenses(2000.0, 0.0, 0.0);

    let with_amp = compute_stats(&curve, 1, ["3031"], &items);
    assert!((with_amp.crit_damage_bonus - 0.40).abs() < f64::EPSILON);
    assert!((with_amp.crit_chance - 0.25).abs() < f64::EPSILON);

    let result = resolve_auto_attack(&with_amp, 1, &target);
    assert!((result.mitigated_damage - 100.0).abs() < f64::EPSILON);
    assert!(result.breakdown.contains("crit x215% incl. +40% = 215"));

    // Two copies apply the bonus once
    let doubled = compute_stats(&curve, 1, ["3031", "3031"], &items);
    assert!((doubled.crit_damage_bonus - 0.40).abs() < f64::EPSILON);

    // Same crit chance without the amplifier keeps the base multiplier: 70 * 1.75 = 122.5
    let plain = compute_stats(&curve, 1, ["3036"], &items);
    assert!((plain.crit_damage_bonus - 0.0).abs() < f64::EPSILON);
    let result = resolve_auto_attack(&plain, 1, &target);
    assert!(result.breakdown.contains("crit x175% = 123"));
}

#[test]
fn test_full_rotation_from_bundled_data() {
    let curves = default_champion_curves();
    let items = default_item_table();

    let attacker = compute_stats(&curves["Annie"], 11, ["3089", "3135", "3020"], &items);
    let target = compute_stats(&curves["Garen"], 11, ["3065"], &items);

    // Void Staff and Sorcerer's Shoes penetration reach the snapshot
    assert!((attacker.magic_pen_percent - 0.40).abs() < f64::EPSILON);
    assert!((attacker.magic_pen_flat - 18.0).abs() < f64::EPSILON);
    // (130 + 95) * 1.35
    assert!((attacker.ability_power - 303.75).abs() < 1e-9);

    let annie_q = parse_value(&json!({
        "format": "spell",
        "id": "AnnieQ",
        "name": "Disintegrate",
        "tooltip": "Deals {{ e1 }} (+{{ a1 }}) <magicDamage>magic damage</magicDamage>.",
        "effect": [null, [80, 115, 150, 185, 220]],
        "vars": [{ "key": "a1", "link": "spelldamage", "coeff": 0.75 }]
    }));
    assert!(annie_q.valid);

    let q = resolve_ability(&annie_q, 5, &attacker, 11, &target);
    let aa = resolve_auto_attack(&attacker, 11, &target);

    // 220 + 0.75 * 303.75
    assert!((q.raw_damage - 447.8125).abs() < 1e-9);
    assert!(q.mitigated_damage < q.raw_damage);
    assert!(q.breakdown.contains("75% AP"));
    assert_eq!(aa.damage_type, DamageType::Physical);

    let report = DamageReport::new().with(q.clone()).with(aa.clone());
    let combined = q.mitigated_damage + aa.mitigated_damage;
    assert!((report.total_mitigated() - combined).abs() < f64::EPSILON);
    assert!(report.percent_of_health(target.hp) > 0.0);
}

#[test]
fn test_unknown_items_never_fail() {
    let curves = default_champion_curves();
    let items = default_item_table();
    let stats = compute_stats(&curves["Talon"], 6, ["0000", "", "3142"], &items);
    let reference = compute_stats(&curves["Talon"], 6, ["3142"], &items);
    assert_eq!(stats, reference);
    assert!((stats.lethality - 18.0).abs() < f64::EPSILON);
}

#[test]
fn test_parse_drops_only_unknown_token() {
    let ability = parse_value(&json!({
        "format": "spell",
        "id": "MixedE",
        "damage_type": "physical",
        "effect": [null, [60, 90]],
        "vars": [
            { "link": "bonusattackdamage", "coeff": 0.8 },
            { "link": "critdamage", "coeff": 0.5 },
            { "link": "spelldamage", "coeff": [0.3, 0.4] }
        ]
    }));
    assert!(ability.valid);
    assert_eq!(ability.base_damage, vec![60.0, 90.0]);
    assert_eq!(
        ability.scalings,
        vec![
            ScalingTerm::new(ScalingStat::BonusAttackDamage, 0.8),
            ScalingTerm::per_rank(ScalingStat::AbilityPower, vec![0.3, 0.4]),
        ]
    );
}

#[test]
fn test_invalid_descriptor_degrades_gracefully() {
    let ability = parse_value(&json!({ "format": "tooltip_v3", "id": "Weird" }));
    assert!(!ability.valid);

    let target = ComputedStats::with_defenses(1000.0, 50.0, 50.0);
    let result = resolve_ability(&ability, 1, &bare_attacker(), 1, &target);
    assert!((result.mitigated_damage - 0.0).abs() < f64::EPSILON);
}
