//! Static station table.

use crate::domain::{Language, Station, StationId};

/// Immutable catalog entry for one station.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationInfo {
    /// Stable catalog id.
    pub id: &'static str,

    /// English name.
    pub name_en: &'static str,

    /// Traditional Chinese name.
    pub name_zh: &'static str,
}

impl StationInfo {
    /// Localized display name.
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::En => self.name_en,
            Language::Zh => self.name_zh,
        }
    }
}

/// All 68 light-rail stations, in catalog order.
pub const STATIONS: &[StationInfo] = &[
    StationInfo { id: "1", name_en: "Tuen Mun Ferry Pier", name_zh: "屯門碼頭" },
    StationInfo { id: "10", name_en: "Melody Garden", name_zh: "美樂" },
    StationInfo { id: "15", name_en: "Butterfly", name_zh: "蝴蝶" },
    StationInfo { id: "20", name_en: "Light Rail Depot", name_zh: "輕鐵車廠" },
    StationInfo { id: "30", name_en: "Lung Mun", name_zh: "龍門" },
    StationInfo { id: "40", name_en: "Tsing Shan Tsuen", name_zh: "青山村" },
    StationInfo { id: "50", name_en: "Tsing Wun", name_zh: "青雲" },
    StationInfo { id: "60", name_en: "Kin On", name_zh: "建安" },
    StationInfo { id: "70", name_en: "Ho Tin", name_zh: "河田" },
    StationInfo { id: "75", name_en: "Choy Yee Bridge", name_zh: "蔡意橋" },
    StationInfo { id: "80", name_en: "Affluence", name_zh: "澤豐" },
    StationInfo { id: "90", name_en: "Tuen Mun Hospital", name_zh: "屯門醫院" },
    StationInfo { id: "100", name_en: "Siu Hong", name_zh: "兆康" },
    StationInfo { id: "110", name_en: "Kei Lun", name_zh: "麒麟" },
    StationInfo { id: "120", name_en: "Ching Chung", name_zh: "青松" },
    StationInfo { id: "130", name_en: "Kin Sang", name_zh: "建生" },
    StationInfo { id: "140", name_en: "Tin King", name_zh: "田景" },
    StationInfo { id: "150", name_en: "Leung King", name_zh: "良景" },
    StationInfo { id: "160", name_en: "San Wai", name_zh: "新圍" },
    StationInfo { id: "170", name_en: "Shek Pai", name_zh: "石排" },
    StationInfo { id: "180", name_en: "Shan King(North)", name_zh: "山景(北)" },
    StationInfo { id: "190", name_en: "Shan King(South)", name_zh: "山景(南)" },
    StationInfo { id: "200", name_en: "Ming Kum", name_zh: "鳴琴" },
    StationInfo { id: "212", name_en: "Tai Hing(North)", name_zh: "大興(北)" },
    StationInfo { id: "220", name_en: "Tai Hing(South)", name_zh: "大興(南)" },
    StationInfo { id: "230", name_en: "Ngan Wai", name_zh: "銀圍" },
    StationInfo { id: "240", name_en: "Siu Hei", name_zh: "兆禧" },
    StationInfo { id: "250", name_en: "Tuen Mun Swimming Pool", name_zh: "屯門泳池" },
    StationInfo { id: "260", name_en: "Goodview Garden", name_zh: "豐景園" },
    StationInfo { id: "265", name_en: "Siu Lun", name_zh: "兆麟" },
    StationInfo { id: "270", name_en: "On Ting", name_zh: "安定" },
    StationInfo { id: "275", name_en: "Yau Oi", name_zh: "友愛" },
    StationInfo { id: "280", name_en: "Town Centre", name_zh: "市中心" },
    StationInfo { id: "295", name_en: "Tuen Mun", name_zh: "屯門" },
    StationInfo { id: "300", name_en: "Pui To", name_zh: "杯渡" },
    StationInfo { id: "310", name_en: "Hoh Fuk Tong", name_zh: "何福堂" },
    StationInfo { id: "320", name_en: "San Hui", name_zh: "新墟" },
    StationInfo { id: "330", name_en: "Prime View", name_zh: "景峰" },
    StationInfo { id: "340", name_en: "Fung Tei", name_zh: "鳳地" },
    StationInfo { id: "350", name_en: "Lam Tei", name_zh: "藍地" },
    StationInfo { id: "360", name_en: "Nai Wai", name_zh: "泥圍" },
    StationInfo { id: "370", name_en: "Chung Uk Tsuen", name_zh: "鍾屋村" },
    StationInfo { id: "380", name_en: "Hung Shui Kiu", name_zh: "洪水橋" },
    StationInfo { id: "390", name_en: "Tong Fong Tsuen", name_zh: "塘坊村" },
    StationInfo { id: "400", name_en: "Ping Shan", name_zh: "屏山" },
    StationInfo { id: "425", name_en: "Hang Mei Tsuen", name_zh: "坑尾村" },
    StationInfo { id: "430", name_en: "Tin Shui Wai", name_zh: "天水圍" },
    StationInfo { id: "435", name_en: "Tin Tsz", name_zh: "天慈" },
    StationInfo { id: "445", name_en: "Tin Yiu", name_zh: "天耀" },
    StationInfo { id: "448", name_en: "Locwood", name_zh: "樂湖" },
    StationInfo { id: "450", name_en: "Tin Wu", name_zh: "天湖" },
    StationInfo { id: "455", name_en: "Ginza", name_zh: "銀座" },
    StationInfo { id: "460", name_en: "Tin Shui", name_zh: "天瑞" },
    StationInfo { id: "468", name_en: "Chung Fu", name_zh: "頌富" },
    StationInfo { id: "480", name_en: "Tin Fu", name_zh: "天富" },
    StationInfo { id: "490", name_en: "Chestwood", name_zh: "翠湖" },
    StationInfo { id: "500", name_en: "Tin Wing", name_zh: "天榮" },
    StationInfo { id: "510", name_en: "Tin Yuet", name_zh: "天悅" },
    StationInfo { id: "520", name_en: "Tin Sau", name_zh: "天秀" },
    StationInfo { id: "530", name_en: "Wetland Park", name_zh: "濕地公園" },
    StationInfo { id: "540", name_en: "Tin Heng", name_zh: "天恒" },
    StationInfo { id: "550", name_en: "Tin Yat", name_zh: "天逸" },
    StationInfo { id: "560", name_en: "Shui Pin Wai", name_zh: "水邊圍" },
    StationInfo { id: "570", name_en: "Fung Nin Road", name_zh: "豐年路" },
    StationInfo { id: "580", name_en: "Hong Lok Road", name_zh: "康樂路" },
    StationInfo { id: "590", name_en: "Tai Tong Road", name_zh: "大棠路" },
    StationInfo { id: "600", name_en: "Yuen Long", name_zh: "元朗" },
    StationInfo { id: "920", name_en: "Sam Shing", name_zh: "三聖" },
];

/// Look up the catalog entry for a station id.
pub fn station_info(id: &StationId) -> Option<&'static StationInfo> {
    STATIONS.iter().find(|s| s.id == id.as_str())
}

/// All catalog stations as fresh `Station` values: `next_trains` empty,
/// `is_pinned` false.
pub fn all_stations(lang: Language) -> Vec<Station> {
    STATIONS
        .iter()
        .filter_map(|info| {
            let id = StationId::parse(info.id).ok()?;
            Some(from_info(id, info, lang))
        })
        .collect()
}

/// Look up a station by id, with empty `next_trains`.
pub fn station_by_id(id: &StationId, lang: Language) -> Option<Station> {
    station_info(id).map(|info| from_info(*id, info, lang))
}

fn from_info(id: StationId, info: &'static StationInfo, lang: Language) -> Station {
    Station {
        station_id: id,
        station_code: id.as_str().to_string(),
        station_name: info.name(lang).to_string(),
        next_trains: Vec::new(),
        is_pinned: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_68_stations() {
        assert_eq!(STATIONS.len(), 68);
    }

    #[test]
    fn every_catalog_id_is_valid() {
        for info in STATIONS {
            assert!(
                StationId::parse(info.id).is_ok(),
                "bad catalog id {}",
                info.id
            );
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        use std::collections::HashSet;
        let ids: HashSet<_> = STATIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), STATIONS.len());
    }

    #[test]
    fn lookup_matches_id_with_empty_trains() {
        for info in STATIONS {
            let id = StationId::parse(info.id).unwrap();
            let station = station_by_id(&id, Language::En).unwrap();
            assert_eq!(station.station_id, id);
            assert!(station.next_trains.is_empty());
            assert!(!station.is_pinned);
        }
    }

    #[test]
    fn unknown_id_is_none() {
        let id = StationId::parse("999").unwrap();
        assert!(station_by_id(&id, Language::En).is_none());
        assert!(station_info(&id).is_none());
    }

    #[test]
    fn names_are_localized() {
        let id = StationId::parse("600").unwrap();
        assert_eq!(
            station_by_id(&id, Language::En).unwrap().station_name,
            "Yuen Long"
        );
        assert_eq!(
            station_by_id(&id, Language::Zh).unwrap().station_name,
            "元朗"
        );
    }

    #[test]
    fn all_stations_covers_catalog() {
        let all = all_stations(Language::Zh);
        assert_eq!(all.len(), STATIONS.len());
        assert_eq!(all[0].station_name, "屯門碼頭");
        assert_eq!(all.last().unwrap().station_name, "三聖");
    }
}
