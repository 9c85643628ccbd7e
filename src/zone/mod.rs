//! The 19 zones of the plane rectangular coordinate system,
//! [Gsi02](crate::Bibliography::Gsi02).
use crate::internal::*;

/// The scale factor on the central meridian, common to all zones
pub const SCALE_FACTOR: f64 = 0.9999;

/// Number of zones in the system
pub const ZONE_COUNT: usize = 19;

/// Zone origins as (latitude, longitude), both in the packed DDDMMSS format.
#[rustfmt::skip]
const ORIGINS: [(f64, f64); ZONE_COUNT] = [
    (330000., 1293000.), //  I    Nagasaki, western Kagoshima
    (330000., 1310000.), //  II   Fukuoka, Saga, Kumamoto, Oita, Miyazaki, Kagoshima
    (360000., 1321000.), //  III  Yamaguchi, Shimane, Hiroshima
    (330000., 1333000.), //  IV   Kagawa, Ehime, Tokushima, Kochi
    (360000., 1342000.), //  V    Hyogo, Tottori, Okayama
    (360000., 1360000.), //  VI   Kyoto, Osaka, Fukui, Shiga, Mie, Nara, Wakayama
    (360000., 1371000.), //  VII  Ishikawa, Toyama, Gifu, Aichi
    (360000., 1383000.), //  VIII Niigata, Nagano, Yamanashi, Shizuoka
    (360000., 1395000.), //  IX   Tokyo, Fukushima, Tochigi, Ibaraki, Saitama, Chiba, Gunma, Kanagawa
    (400000., 1405000.), //  X    Aomori, Akita, Yamagata, Iwate, Miyagi
    (440000., 1401500.), //  XI   Western Hokkaido
    (440000., 1421500.), //  XII  Central Hokkaido
    (440000., 1441500.), //  XIII Eastern Hokkaido
    (260000., 1420000.), //  XIV  Ogasawara, east of 140°30'
    (260000., 1273000.), //  XV   Okinawa main islands
    (260000., 1240000.), //  XVI  Sakishima islands
    (260000., 1310000.), //  XVII Daito islands
    (200000., 1360000.), //  XVIII Okinotorishima
    (260000., 1540000.), //  XIX  Minamitorishima
];

/// The origin of one zone. Immutable once built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneDefinition {
    id: u8,
    lat_0: f64,
    lon_0: f64,
}

impl ZoneDefinition {
    /// Zone number, 1..=19
    #[must_use]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Origin latitude in the packed DDDMMSS format
    #[must_use]
    pub fn origin_latitude_packed(&self) -> f64 {
        self.lat_0
    }

    /// Origin longitude in the packed DDDMMSS format
    #[must_use]
    pub fn origin_longitude_packed(&self) -> f64 {
        self.lon_0
    }

    /// Origin latitude in degrees
    #[must_use]
    pub fn origin_latitude(&self) -> f64 {
        angular::packed_dms_to_dd(self.lat_0)
    }

    /// Origin longitude in degrees
    #[must_use]
    pub fn origin_longitude(&self) -> f64 {
        angular::packed_dms_to_dd(self.lon_0)
    }

    #[must_use]
    pub fn origin_latitude_radians(&self) -> f64 {
        angular::packed_dms_to_radians(self.lat_0)
    }

    #[must_use]
    pub fn origin_longitude_radians(&self) -> f64 {
        angular::packed_dms_to_radians(self.lon_0)
    }
}

/// All zone definitions, indexed by zone number.
///
/// Built explicitly and handed to whoever needs it: there is no global instance,
/// and any number of independent tables may coexist.
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneTable {
    zones: [ZoneDefinition; ZONE_COUNT],
}

impl Default for ZoneTable {
    fn default() -> ZoneTable {
        ZoneTable::new()
    }
}

impl ZoneTable {
    #[must_use]
    pub fn new() -> ZoneTable {
        let mut zones = [ZoneDefinition {
            id: 0,
            lat_0: 0.,
            lon_0: 0.,
        }; ZONE_COUNT];
        for (i, (lat_0, lon_0)) in ORIGINS.iter().enumerate() {
            zones[i] = ZoneDefinition {
                id: i as u8 + 1,
                lat_0: *lat_0,
                lon_0: *lon_0,
            };
        }
        ZoneTable { zones }
    }

    /// The definition of zone `id`. Zone numbers outside 1..=19 are an error,
    /// rather than silently yielding an origin at (0, 0).
    pub fn get(&self, id: u8) -> Result<&ZoneDefinition, Error> {
        if !(1..=ZONE_COUNT as u8).contains(&id) {
            error!("Zone {id}. Must be an integer in the interval 1..=19");
            return Err(Error::UnknownZone(id));
        }
        Ok(&self.zones[id as usize - 1])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneDefinition> {
        self.zones.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

// ----- Tests ---------------------------------------------------------------------
