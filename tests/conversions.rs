use float_eq::assert_float_eq;
use jprcs::prelude::*;

// Reference values computed independently, and checked against a forward
// transverse Mercator series to well below a millimeter
#[rustfmt::skip]
const CASES: [(u8, f64, f64, f64, f64); 6] = [
    ( 9,  11543.6883,  22916.2436, 36.103_785_789_161_584, 140.087_885_490_663_2),
    ( 9, -50000.,     -80000.,     35.546_044_473_486_376, 138.950_904_460_961_94),
    ( 9, 100000.,      50000.,     36.900_026_875_677_33,  140.394_444_510_382_02),
    ( 1,  11543.6883,  22916.2436, 33.103_865_356_679_51,  129.745_557_737_861_82),
    ( 1, -50000.,     -80000.,     32.546_167_083_341_52,  128.648_117_166_877_06),
    (11, 100000.,      50000.,     44.898_354_063_162_3,   140.883_162_470_507_7),
];

#[test]
fn inverse_projection() -> Result<(), Error> {
    for (zone, x, y, lat, lon) in CASES {
        let result = convert(zone, x, y)?;
        assert_float_eq!(result.latitude, lat, abs <= 1e-9);
        assert_float_eq!(result.longitude, lon, abs <= 1e-9);
    }
    Ok(())
}

#[test]
fn one_converter_many_points() -> Result<(), Error> {
    let mut prc = PlaneRectangular::new(9)?;
    for (zone, x, y, lat, lon) in CASES.into_iter().filter(|case| case.0 == 9) {
        assert_eq!(prc.zone().id(), zone);
        prc.set_xy(x, y);
        assert_float_eq!(prc.latitude(), lat, abs <= 1e-9);
        assert_float_eq!(prc.longitude(), lon, abs <= 1e-9);
    }
    Ok(())
}

#[test]
fn formatted_output() -> Result<(), Error> {
    let result = convert(9, 11543.6883, 22916.2436)?;
    assert_eq!(result.latitude_dms, "36°06'13.628\"");
    assert_eq!(result.longitude_dms, "140°05'16.387\"");

    let origin = convert(9, 0., 0.)?;
    assert_eq!(origin.latitude_dms, "36°00'0.0000\"");
    assert_eq!(origin.longitude_dms, "139°50'0.0000\"");
    Ok(())
}

#[test]
fn every_zone_origin() -> Result<(), Error> {
    let zones = ZoneTable::new();
    assert_eq!(zones.len(), 19);
    for zone in zones.iter() {
        let result = convert(zone.id(), 0., 0.)?;
        assert_float_eq!(result.latitude, zone.origin_latitude(), abs <= 1e-12);
        assert_float_eq!(result.longitude, zone.origin_longitude(), abs <= 1e-12);
    }
    Ok(())
}

#[test]
fn zones_out_of_range() {
    for zone in [0, 20, 255] {
        assert!(matches!(convert(zone, 0., 0.), Err(Error::UnknownZone(z)) if z == zone));
    }
}

#[test]
fn scale_along_the_zone() -> Result<(), Error> {
    let mut prc = PlaneRectangular::new(9)?;
    prc.set_xy(11543.6883, 22916.2436);
    let m = prc.scale_factor();
    assert_float_eq!(m.value(), 0.999_906_47, abs <= 1e-8);
    assert!(m.is_acceptable());

    // The scale grows monotonically away from the central meridian
    let mut last = prc.scale_factor();
    for y in [40_000., 80_000., 120_000., 160_000.] {
        prc.set_y(y);
        let m = prc.scale_factor();
        assert!(m > last);
        last = m;
    }
    assert!(!last.is_acceptable());
    Ok(())
}
