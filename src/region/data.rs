//! Built-in dataset: SCB region codes as of 2024.
//!
//! One nation (riket), 21 counties (län) and 290 municipalities (kommuner).
//! Replace wholesale when regions change administratively.

use super::types::{Region, RegionKind};

/// A literal catalog row. Converted to an owned [`Region`] at build time.
pub(super) struct RegionEntry {
    code: &'static str,
    name: &'static str,
    kind: RegionKind,
    county_code: Option<&'static str>,
}

impl RegionEntry {
    pub(super) fn to_region(&self) -> Region {
        Region {
            code: self.code.to_string(),
            name: self.name.to_string(),
            kind: self.kind,
            county_code: self.county_code.map(str::to_string),
        }
    }
}

const fn nation(code: &'static str, name: &'static str) -> RegionEntry {
    RegionEntry { code, name, kind: RegionKind::Nation, county_code: None }
}

const fn county(code: &'static str, name: &'static str) -> RegionEntry {
    RegionEntry { code, name, kind: RegionKind::County, county_code: None }
}

const fn municipality(code: &'static str, name: &'static str, county_code: &'static str) -> RegionEntry {
    RegionEntry { code, name, kind: RegionKind::Municipality, county_code: Some(county_code) }
}

pub(super) const ALL_REGIONS: &[RegionEntry] = &[
    // ── Nation ────────────────────────────────────────────
    nation("00", "Riket"),

    // ── Counties (län) ────────────────────────────────────
    county("01", "Stockholms län"),
    county("03", "Uppsala län"),
    county("04", "Södermanlands län"),
    county("05", "Östergötlands län"),
    county("06", "Jönköpings län"),
    county("07", "Kronobergs län"),
    county("08", "Kalmar län"),
    county("09", "Gotlands län"),
    county("10", "Blekinge län"),
    county("12", "Skåne län"),
    county("13", "Hallands län"),
    county("14", "Västra Götalands län"),
    county("17", "Värmlands län"),
    county("18", "Örebro län"),
    county("19", "Västmanlands län"),
    county("20", "Dalarnas län"),
    county("21", "Gävleborgs län"),
    county("22", "Västernorrlands län"),
    county("23", "Jämtlands län"),
    county("24", "Västerbottens län"),
    county("25", "Norrbottens län"),

    // ── Municipalities (kommuner) ─────────────────────────
    // Stockholms län (01)
    municipality("0114", "Upplands Väsby", "01"),
    municipality("0115", "Vallentuna", "01"),
    municipality("0117", "Österåker", "01"),
    municipality("0120", "Värmdö", "01"),
    municipality("0123", "Järfälla", "01"),
    municipality("0125", "Ekerö", "01"),
    municipality("0126", "Huddinge", "01"),
    municipality("0127", "Botkyrka", "01"),
    municipality("0128", "Salem", "01"),
    municipality("0136", "Haninge", "01"),
    municipality("0138", "Tyresö", "01"),
    municipality("0139", "Upplands-Bro", "01"),
    municipality("0140", "Nykvarn", "01"),
    municipality("0160", "Täby", "01"),
    municipality("0162", "Danderyd", "01"),
    municipality("0163", "Sollentuna", "01"),
    municipality("0180", "Stockholm", "01"),
    municipality("0181", "Södertälje", "01"),
    municipality("0182", "Nacka", "01"),
    municipality("0183", "Sundbyberg", "01"),
    municipality("0184", "Solna", "01"),
    municipality("0186", "Lidingö", "01"),
    municipality("0187", "Vaxholm", "01"),
    municipality("0188", "Norrtälje", "01"),
    municipality("0191", "Sigtuna", "01"),
    municipality("0192", "Nynäshamn", "01"),

    // Uppsala län (03)
    municipality("0305", "Håbo", "03"),
    municipality("0319", "Älvkarleby", "03"),
    municipality("0330", "Knivsta", "03"),
    municipality("0331", "Heby", "03"),
    municipality("0360", "Tierp", "03"),
    municipality("0380", "Uppsala", "03"),
    municipality("0381", "Enköping", "03"),
    municipality("0382", "Östhammar", "03"),

    // Södermanlands län (04)
    municipality("0428", "Vingåker", "04"),
    municipality("0461", "Gnesta", "04"),
    municipality("0480", "Nyköping", "04"),
    municipality("0481", "Oxelösund", "04"),
    municipality("0482", "Flen", "04"),
    municipality("0483", "Katrineholm", "04"),
    municipality("0484", "Eskilstuna", "04"),
    municipality("0486", "Strängnäs", "04"),
    municipality("0488", "Trosa", "04"),

    // Östergötlands län (05)
    municipality("0509", "Ödeshög", "05"),
    municipality("0512", "Ydre", "05"),
    municipality("0513", "Kinda", "05"),
    municipality("0560", "Boxholm", "05"),
    municipality("0561", "Åtvidaberg", "05"),
    municipality("0562", "Finspång", "05"),
    municipality("0563", "Valdemarsvik", "05"),
    municipality("0580", "Linköping", "05"),
    municipality("0581", "Norrköping", "05"),
    municipality("0582", "Söderköping", "05"),
    municipality("0583", "Motala", "05"),
    municipality("0584", "Vadstena", "05"),
    municipality("0586", "Mjölby", "05"),

    // Jönköpings län (06)
    municipality("0604", "Aneby", "06"),
    municipality("0617", "Gnosjö", "06"),
    municipality("0642", "Mullsjö", "06"),
    municipality("0643", "Habo", "06"),
    municipality("0662", "Gislaved", "06"),
    municipality("0665", "Vaggeryd", "06"),
    municipality("0680", "Jönköping", "06"),
    municipality("0682", "Nässjö", "06"),
    municipality("0683", "Värnamo", "06"),
    municipality("0684", "Sävsjö", "06"),
    municipality("0685", "Vetlanda", "06"),
    municipality("0686", "Eksjö", "06"),
    municipality("0687", "Tranås", "06"),

    // Kronobergs län (07)
    municipality("0760", "Uppvidinge", "07"),
    municipality("0761", "Lessebo", "07"),
    municipality("0763", "Tingsryd", "07"),
    municipality("0764", "Alvesta", "07"),
    municipality("0765", "Älmhult", "07"),
    municipality("0767", "Markaryd", "07"),
    municipality("0780", "Växjö", "07"),
    municipality("0781", "Ljungby", "07"),

    // Kalmar län (08)
    municipality("0821", "Högsby", "08"),
    municipality("0834", "Torsås", "08"),
    municipality("0840", "Mörbylånga", "08"),
    municipality("0860", "Hultsfred", "08"),
    municipality("0861", "Mönsterås", "08"),
    municipality("0862", "Emmaboda", "08"),
    municipality("0880", "Kalmar", "08"),
    municipality("0881", "Nybro", "08"),
    municipality("0882", "Oskarshamn", "08"),
    municipality("0883", "Västervik", "08"),
    municipality("0884", "Vimmerby", "08"),
    municipality("0885", "Borgholm", "08"),

    // Gotlands län (09)
    municipality("0980", "Gotland", "09"),

    // Blekinge län (10)
    municipality("1060", "Olofström", "10"),
    municipality("1080", "Karlskrona", "10"),
    municipality("1081", "Ronneby", "10"),
    municipality("1082", "Karlshamn", "10"),
    municipality("1083", "Sölvesborg", "10"),

    // Skåne län (12)
    municipality("1214", "Svalöv", "12"),
    municipality("1230", "Staffanstorp", "12"),
    municipality("1231", "Burlöv", "12"),
    municipality("1233", "Vellinge", "12"),
    municipality("1256", "Östra Göinge", "12"),
    municipality("1257", "Örkelljunga", "12"),
    municipality("1260", "Bjuv", "12"),
    municipality("1261", "Kävlinge", "12"),
    municipality("1262", "Lomma", "12"),
    municipality("1263", "Svedala", "12"),
    municipality("1264", "Skurup", "12"),
    municipality("1265", "Sjöbo", "12"),
    municipality("1266", "Hörby", "12"),
    municipality("1267", "Höör", "12"),
    municipality("1270", "Tomelilla", "12"),
    municipality("1272", "Bromölla", "12"),
    municipality("1273", "Osby", "12"),
    municipality("1275", "Perstorp", "12"),
    municipality("1276", "Klippan", "12"),
    municipality("1277", "Åstorp", "12"),
    municipality("1278", "Båstad", "12"),
    municipality("1280", "Malmö", "12"),
    municipality("1281", "Lund", "12"),
    municipality("1282", "Landskrona", "12"),
    municipality("1283", "Helsingborg", "12"),
    municipality("1284", "Höganäs", "12"),
    municipality("1285", "Eslöv", "12"),
    municipality("1286", "Ystad", "12"),
    municipality("1287", "Trelleborg", "12"),
    municipality("1290", "Kristianstad", "12"),
    municipality("1291", "Simrishamn", "12"),
    municipality("1292", "Ängelholm", "12"),
    municipality("1293", "Hässleholm", "12"),

    // Hallands län (13)
    municipality("1315", "Hylte", "13"),
    municipality("1380", "Halmstad", "13"),
    municipality("1381", "Laholm", "13"),
    municipality("1382", "Falkenberg", "13"),
    municipality("1383", "Varberg", "13"),
    municipality("1384", "Kungsbacka", "13"),

    // Västra Götalands län (14)
    municipality("1401", "Härryda", "14"),
    municipality("1402", "Partille", "14"),
    municipality("1407", "Öckerö", "14"),
    municipality("1415", "Stenungsund", "14"),
    municipality("1419", "Tjörn", "14"),
    municipality("1421", "Orust", "14"),
    municipality("1427", "Sotenäs", "14"),
    municipality("1430", "Munkedal", "14"),
    municipality("1435", "Tanum", "14"),
    municipality("1438", "Dals-Ed", "14"),
    municipality("1439", "Färgelanda", "14"),
    municipality("1440", "Ale", "14"),
    municipality("1441", "Lerum", "14"),
    municipality("1442", "Vårgårda", "14"),
    municipality("1443", "Bollebygd", "14"),
    municipality("1444", "Grästorp", "14"),
    municipality("1445", "Essunga", "14"),
    municipality("1446", "Karlsborg", "14"),
    municipality("1447", "Gullspång", "14"),
    municipality("1452", "Tranemo", "14"),
    municipality("1460", "Bengtsfors", "14"),
    municipality("1461", "Mellerud", "14"),
    municipality("1462", "Lilla Edet", "14"),
    municipality("1463", "Mark", "14"),
    municipality("1465", "Svenljunga", "14"),
    municipality("1466", "Herrljunga", "14"),
    municipality("1470", "Vara", "14"),
    municipality("1471", "Götene", "14"),
    municipality("1472", "Tibro", "14"),
    municipality("1473", "Töreboda", "14"),
    municipality("1480", "Göteborg", "14"),
    municipality("1481", "Mölndal", "14"),
    municipality("1482", "Kungälv", "14"),
    municipality("1484", "Lysekil", "14"),
    municipality("1485", "Uddevalla", "14"),
    municipality("1486", "Strömstad", "14"),
    municipality("1487", "Vänersborg", "14"),
    municipality("1488", "Trollhättan", "14"),
    municipality("1489", "Alingsås", "14"),
    municipality("1490", "Borås", "14"),
    municipality("1491", "Ulricehamn", "14"),
    municipality("1492", "Åmål", "14"),
    municipality("1493", "Mariestad", "14"),
    municipality("1494", "Lidköping", "14"),
    municipality("1495", "Skara", "14"),
    municipality("1496", "Skövde", "14"),
    municipality("1497", "Hjo", "14"),
    municipality("1498", "Tidaholm", "14"),
    municipality("1499", "Falköping", "14"),

    // Värmlands län (17)
    municipality("1715", "Kil", "17"),
    municipality("1730", "Eda", "17"),
    municipality("1737", "Torsby", "17"),
    municipality("1760", "Storfors", "17"),
    municipality("1761", "Hammarö", "17"),
    municipality("1762", "Munkfors", "17"),
    municipality("1763", "Forshaga", "17"),
    municipality("1764", "Grums", "17"),
    municipality("1765", "Årjäng", "17"),
    municipality("1766", "Sunne", "17"),
    municipality("1780", "Karlstad", "17"),
    municipality("1781", "Kristinehamn", "17"),
    municipality("1782", "Filipstad", "17"),
    municipality("1783", "Hagfors", "17"),
    municipality("1784", "Arvika", "17"),
    municipality("1785", "Säffle", "17"),

    // Örebro län (18)
    municipality("1814", "Lekeberg", "18"),
    municipality("1860", "Laxå", "18"),
    municipality("1861", "Hallsberg", "18"),
    municipality("1862", "Degerfors", "18"),
    municipality("1863", "Hällefors", "18"),
    municipality("1864", "Ljusnarsberg", "18"),
    municipality("1880", "Örebro", "18"),
    municipality("1881", "Kumla", "18"),
    municipality("1882", "Askersund", "18"),
    municipality("1883", "Karlskoga", "18"),
    municipality("1884", "Nora", "18"),
    municipality("1885", "Lindesberg", "18"),

    // Västmanlands län (19)
    municipality("1904", "Skinnskatteberg", "19"),
    municipality("1907", "Surahammar", "19"),
    municipality("1960", "Kungsör", "19"),
    municipality("1961", "Hallstahammar", "19"),
    municipality("1962", "Norberg", "19"),
    municipality("1980", "Västerås", "19"),
    municipality("1981", "Sala", "19"),
    municipality("1982", "Fagersta", "19"),
    municipality("1983", "Köping", "19"),
    municipality("1984", "Arboga", "19"),

    // Dalarnas län (20)
    municipality("2021", "Vansbro", "20"),
    municipality("2023", "Malung-Sälen", "20"),
    municipality("2026", "Gagnef", "20"),
    municipality("2029", "Leksand", "20"),
    municipality("2031", "Rättvik", "20"),
    municipality("2034", "Orsa", "20"),
    municipality("2039", "Älvdalen", "20"),
    municipality("2061", "Smedjebacken", "20"),
    municipality("2062", "Mora", "20"),
    municipality("2080", "Falun", "20"),
    municipality("2081", "Borlänge", "20"),
    municipality("2082", "Säter", "20"),
    municipality("2083", "Hedemora", "20"),
    municipality("2084", "Avesta", "20"),
    municipality("2085", "Ludvika", "20"),

    // Gävleborgs län (21)
    municipality("2101", "Ockelbo", "21"),
    municipality("2104", "Hofors", "21"),
    municipality("2121", "Ovanåker", "21"),
    municipality("2132", "Nordanstig", "21"),
    municipality("2161", "Ljusdal", "21"),
    municipality("2180", "Gävle", "21"),
    municipality("2181", "Sandviken", "21"),
    municipality("2182", "Söderhamn", "21"),
    municipality("2183", "Bollnäs", "21"),
    municipality("2184", "Hudiksvall", "21"),

    // Västernorrlands län (22)
    municipality("2260", "Ånge", "22"),
    municipality("2262", "Timrå", "22"),
    municipality("2280", "Härnösand", "22"),
    municipality("2281", "Sundsvall", "22"),
    municipality("2282", "Kramfors", "22"),
    municipality("2283", "Sollefteå", "22"),
    municipality("2284", "Örnsköldsvik", "22"),

    // Jämtlands län (23)
    municipality("2303", "Ragunda", "23"),
    municipality("2305", "Bräcke", "23"),
    municipality("2309", "Krokom", "23"),
    municipality("2313", "Strömsund", "23"),
    municipality("2321", "Åre", "23"),
    municipality("2326", "Berg", "23"),
    municipality("2361", "Härjedalen", "23"),
    municipality("2380", "Östersund", "23"),

    // Västerbottens län (24)
    municipality("2401", "Nordmaling", "24"),
    municipality("2403", "Bjurholm", "24"),
    municipality("2404", "Vindeln", "24"),
    municipality("2409", "Robertsfors", "24"),
    municipality("2417", "Norsjö", "24"),
    municipality("2418", "Malå", "24"),
    municipality("2421", "Storuman", "24"),
    municipality("2422", "Sorsele", "24"),
    municipality("2425", "Dorotea", "24"),
    municipality("2460", "Vännäs", "24"),
    municipality("2462", "Vilhelmina", "24"),
    municipality("2463", "Åsele", "24"),
    municipality("2480", "Umeå", "24"),
    municipality("2481", "Lycksele", "24"),
    municipality("2482", "Skellefteå", "24"),

    // Norrbottens län (25)
    municipality("2505", "Arvidsjaur", "25"),
    municipality("2506", "Arjeplog", "25"),
    municipality("2510", "Jokkmokk", "25"),
    municipality("2513", "Överkalix", "25"),
    municipality("2514", "Kalix", "25"),
    municipality("2518", "Övertorneå", "25"),
    municipality("2521", "Pajala", "25"),
    municipality("2523", "Gällivare", "25"),
    municipality("2560", "Älvsbyn", "25"),
    municipality("2580", "Luleå", "25"),
    municipality("2581", "Piteå", "25"),
    municipality("2582", "Boden", "25"),
    municipality("2583", "Haparanda", "25"),
    municipality("2584", "Kiruna", "25"),
];
