//! Integration tests for rashi and nakshatra lookup.

use dasa_vedic_base::{
    ALL_NAKSHATRAS, Graha, NAKSHATRA_SPAN_27, Nakshatra, Rashi, rashi_from_longitude,
    resolve_nakshatra,
};

#[test]
fn nakshatra_sweep_all_27() {
    for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
        let lon = i as f64 * NAKSHATRA_SPAN_27 + NAKSHATRA_SPAN_27 / 8.0;
        let p = resolve_nakshatra(lon).unwrap();
        assert_eq!(p.nakshatra, *n, "nakshatra at {lon}");
        assert_eq!(p.index, i as u8);
        assert_eq!(p.pada, 1);
    }
}

#[test]
fn every_boundary_opens_the_next_segment() {
    for i in 1..27u32 {
        let lon = i as f64 * 40.0 / 3.0;
        let p = resolve_nakshatra(lon).unwrap();
        assert_eq!(p.index as u32, i, "boundary {i} at {lon}");
        assert_eq!(p.pada, 1);
    }
}

#[test]
fn known_positions() {
    // Purva Phalguni spans 133°20′..146°40′.
    let p = resolve_nakshatra(133.5).unwrap();
    assert_eq!(p.nakshatra, Nakshatra::PurvaPhalguni);
    assert_eq!(p.ruler, Graha::Shukra);
    assert_eq!(p.pada, 1);

    // Mula spans 240°..253°20′; pada 4 opens at 250°.
    let p = resolve_nakshatra(250.0).unwrap();
    assert_eq!(p.nakshatra, Nakshatra::Mula);
    assert_eq!(p.ruler, Graha::Ketu);
    assert_eq!(p.pada, 4);
}

#[test]
fn rashi_sweep_all_12() {
    let expected = [
        Rashi::Mesha,
        Rashi::Vrishabha,
        Rashi::Mithuna,
        Rashi::Karka,
        Rashi::Simha,
        Rashi::Kanya,
        Rashi::Tula,
        Rashi::Vrischika,
        Rashi::Dhanu,
        Rashi::Makara,
        Rashi::Kumbha,
        Rashi::Meena,
    ];
    for (i, r) in expected.iter().enumerate() {
        let info = rashi_from_longitude(i as f64 * 30.0 + 15.0);
        assert_eq!(info.rashi, *r);
        assert_eq!(info.rashi_index, i as u8);
    }
}
