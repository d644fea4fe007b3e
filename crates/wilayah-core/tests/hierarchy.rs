use wilayah_core::prelude::*;
use wilayah_core::text::locale_cmp;
use std::cmp::Ordering;

const EXAMPLE: &str = "\
36,DI Yogyakarta
36.71,Kota Yogyakarta
36.71.01,Gondokusuman
36.71.01.1003,Demangan
";

const MIXED: &str = "\
51.71.01.1002,Sidakarya
32,Jawa Barat
51,Bali
32.73,Kota Bandung
32.01,Kabupaten Bogor
51.71.01.1001,Sesetan
51.71,Kota Denpasar
31,DKI Jakarta
51.71.01,Denpasar Selatan
32.73.01.1002,Caringin
32.73.01.1001,Cijerah
32.73.01,Bandung Kulon
";

fn assert_sorted<'a>(names: impl Iterator<Item = &'a str>) {
    let names: Vec<&str> = names.collect();
    for pair in names.windows(2) {
        assert_ne!(
            locale_cmp(pair[0], pair[1]),
            Ordering::Greater,
            "{:?} should not come before {:?}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn resolves_the_example_path() {
    let h = build_hierarchy(EXAMPLE);
    let path = h.region_path("36.71.01.1003");

    assert_eq!(path.village.map(|v| v.name()), Some("Demangan"));
    assert_eq!(path.district.map(|d| d.name()), Some("Gondokusuman"));
    assert_eq!(path.regency.map(|r| r.name()), Some("Kota Yogyakarta"));
    assert_eq!(path.province.map(|p| p.name()), Some("DI Yogyakarta"));
    assert_eq!(
        h.region_description("36.71.01.1003"),
        "Demangan, Gondokusuman, Kota Yogyakarta, DI Yogyakarta"
    );
}

#[test]
fn unknown_code_is_not_an_error() {
    let h = build_hierarchy(EXAMPLE);
    assert_eq!(h.region_description("99.99.99.9999"), "Kode 99.99.99.9999");

    let path = h.region_path("99.99.99.9999");
    assert!(path.is_empty());
    assert_eq!(path, RegionPath::default());
}

#[test]
fn building_twice_gives_identical_trees() {
    assert_eq!(build_hierarchy(MIXED), build_hierarchy(MIXED));
}

#[test]
fn ancestor_codes_are_prefixes() {
    let h = build_hierarchy(MIXED);
    for v in h.villages() {
        let (district, _) = v.code.rsplit_once('.').expect("village has four segments");
        assert_eq!(v.district_code, district);
        let (regency, _) = district.rsplit_once('.').expect("district has three segments");
        assert_eq!(v.regency_code, regency);
        let (province, _) = regency.rsplit_once('.').expect("regency has two segments");
        assert_eq!(v.province_code, province);
    }
    for d in h.districts() {
        assert!(d.code.starts_with(&format!("{}.", d.regency_code)));
        assert!(d.regency_code.starts_with(&format!("{}.", d.province_code)));
    }
    for r in h.regencies() {
        assert!(r.code.starts_with(&format!("{}.", r.province_code)));
    }
}

#[test]
fn repeated_village_line_registers_once() {
    let h = build_hierarchy("36.71.01.1003,Demangan\n36.71.01.1003,Demangan\n36.71.01.1003,Lain");
    assert_eq!(h.stats().villages, 1);
    let district = h.district("36.71.01").expect("district placeholder");
    assert_eq!(district.villages.len(), 1);
    assert_eq!(h.village("36.71.01.1003").map(|v| v.name()), Some("Demangan"));
}

#[test]
fn placeholder_name_is_backfilled_once() {
    let h = build_hierarchy(
        "36.71.01.1003,Demangan\n36.71.01,Gondokusuman\n36.71.01,SomethingElse",
    );
    assert_eq!(h.district("36.71.01").map(|d| d.name()), Some("Gondokusuman"));
}

#[test]
fn every_level_is_sorted_by_name() {
    let h = build_hierarchy(MIXED);

    let provinces: Vec<&str> = h.provinces().iter().map(|p| p.name()).collect();
    assert_eq!(provinces, ["Bali", "DKI Jakarta", "Jawa Barat"]);

    for p in h.provinces() {
        assert_sorted(h.regencies_of(p).map(|r| r.name()));
        for r in h.regencies_of(p) {
            assert_sorted(h.districts_of(r).map(|d| d.name()));
            for d in h.districts_of(r) {
                assert_sorted(h.villages_of(d).map(|v| v.name()));
            }
        }
    }

    let jabar = h.province("32").expect("Jawa Barat");
    let regencies: Vec<&str> = h.regencies_of(jabar).map(|r| r.name()).collect();
    assert_eq!(regencies, ["Kabupaten Bogor", "Kota Bandung"]);

    let kulon = h.district("32.73.01").expect("Bandung Kulon");
    let villages: Vec<&str> = h.villages_of(kulon).map(|v| v.name()).collect();
    assert_eq!(villages, ["Caringin", "Cijerah"]);
}

#[test]
fn province_lookup_survives_sorting() {
    let h = build_hierarchy(MIXED);
    for code in ["31", "32", "51"] {
        assert_eq!(h.province(code).map(|p| p.code()), Some(code));
    }
}

#[test]
fn names_differing_only_in_case_put_lowercase_first() {
    let h = build_hierarchy("1,ACEH\n2,Aceh\n3,aceh\n4,Bali\n5,Sénen\n6,Senen");
    let provinces: Vec<&str> = h.provinces().iter().map(|p| p.name()).collect();
    assert_eq!(provinces, ["aceh", "Aceh", "ACEH", "Bali", "Senen", "Sénen"]);
}

#[test]
fn surrounding_whitespace_in_codes_is_ignored() {
    let h = build_hierarchy(EXAMPLE);
    let padded = " 36.71.01.1003 ";
    assert_eq!(h.lookup(padded).map(|r| r.name()), Some("Demangan"));
    assert_eq!(h.region_path(padded).village.map(|v| v.name()), Some("Demangan"));
    assert_eq!(
        h.region_description(padded),
        "Demangan, Gondokusuman, Kota Yogyakarta, DI Yogyakarta"
    );
    assert_eq!(h.region_description(" 99.01.01.0001 "), "Kode 99.01.01.0001");
}

#[test]
fn malformed_lines_are_ignored() {
    let text = "\
36,DI Yogyakarta

no comma here
36.71,
,Tanpa Kode
36.71,Kota Yogyakarta
36.71.01.1003.7,Terlalu Dalam
";
    let h = build_hierarchy(text);
    let stats = h.stats();
    assert_eq!(stats.provinces, 1);
    assert_eq!(stats.regencies, 1);
    assert_eq!(stats.districts, 0);
    assert_eq!(stats.villages, 0);
    assert_eq!(h.regency("36.71").map(|r| r.name()), Some("Kota Yogyakarta"));
}

#[test]
fn crlf_and_bom_are_tolerated() {
    let h = build_hierarchy("\u{feff}36,DI Yogyakarta\r\n36.71,Kota Yogyakarta\r\n");
    assert_eq!(h.province("36").map(|p| p.name()), Some("DI Yogyakarta"));
    assert_eq!(h.regency("36.71").map(|r| r.name()), Some("Kota Yogyakarta"));
}

#[test]
fn split_is_independent_of_the_hierarchy() {
    let parts = split_region_code("36.71.01.1003");
    assert_eq!(parts.province_code, "36");
    assert_eq!(parts.regency_code, "36.71");
    assert_eq!(parts.district_code, "36.71.01");
    assert_eq!(parts.village_code, "36.71.01.1003");

    let parts = split_region_code("36");
    assert_eq!(
        parts,
        RegionCodeParts {
            province_code: "36".into(),
            ..RegionCodeParts::default()
        }
    );
}

#[test]
fn hierarchy_is_shareable_across_threads() {
    let h = std::sync::Arc::new(build_hierarchy(MIXED));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let h = std::sync::Arc::clone(&h);
            std::thread::spawn(move || h.region_description("51.71.01.1001"))
        })
        .collect();
    for handle in handles {
        assert_eq!(
            handle.join().expect("thread"),
            "Sesetan, Denpasar Selatan, Kota Denpasar, Bali"
        );
    }
}
