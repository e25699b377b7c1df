use std::collections::HashMap;

/// Display-label lookup for raw data values.
///
/// Every lookup falls back to the raw value when no label is known, so callers
/// never have to handle a miss.
pub trait Translator: Send + Sync {
    fn city<'a>(&'a self, raw: &'a str) -> &'a str;
    fn country<'a>(&'a self, raw: &'a str) -> &'a str;
    fn continent<'a>(&'a self, raw: &'a str) -> &'a str;
    fn region<'a>(&'a self, raw: &'a str) -> &'a str;
}

/// Fixed lookup tables held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticTranslations {
    cities: HashMap<String, String>,
    countries: HashMap<String, String>,
    /// Continents and sub-regions share one table
    regions: HashMap<String, String>,
}

impl StaticTranslations {
    /// No labels at all; every lookup returns the raw value.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Hungarian display labels for the deals feed and the airport table
    /// (English city, country, continent and region names).
    pub fn hungarian() -> Self {
        Self {
            cities: to_map(HU_CITIES),
            countries: to_map(HU_COUNTRIES),
            regions: to_map(HU_REGIONS),
        }
    }
}

impl Translator for StaticTranslations {
    fn city<'a>(&'a self, raw: &'a str) -> &'a str {
        lookup(&self.cities, raw)
    }

    fn country<'a>(&'a self, raw: &'a str) -> &'a str {
        lookup(&self.countries, raw)
    }

    fn continent<'a>(&'a self, raw: &'a str) -> &'a str {
        lookup(&self.regions, raw)
    }

    fn region<'a>(&'a self, raw: &'a str) -> &'a str {
        lookup(&self.regions, raw)
    }
}

fn lookup<'a>(table: &'a HashMap<String, String>, raw: &'a str) -> &'a str {
    table.get(raw).map(String::as_str).unwrap_or(raw)
}

fn to_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(raw, label)| (raw.to_string(), label.to_string()))
        .collect()
}

// Only entries whose label differs from the raw value are listed.

const HU_COUNTRIES: &[(&str, &str)] = &[
    ("Albania", "Albánia"),
    ("Armenia", "Örményország"),
    ("Austria", "Ausztria"),
    ("Azerbaijan", "Azerbajdzsán"),
    ("Belarus", "Fehéroroszország"),
    ("Bosnia and Herzegovina", "Bosznia-Hercegovina"),
    ("Bulgaria", "Bulgária"),
    ("Croatia", "Horvátország"),
    ("Cyprus", "Ciprus"),
    ("Czech Republic", "Csehország"),
    ("Czechia", "Csehország"),
    ("Denmark", "Dánia"),
    ("Egypt", "Egyiptom"),
    ("Estonia", "Észtország"),
    ("Finland", "Finnország"),
    ("France", "Franciaország"),
    ("Georgia", "Grúzia"),
    ("Germany", "Németország"),
    ("Greece", "Görögország"),
    ("Hungary", "Magyarország"),
    ("Iceland", "Izland"),
    ("Ireland", "Írország"),
    ("Israel", "Izrael"),
    ("Italy", "Olaszország"),
    ("Jordan", "Jordánia"),
    ("Kazakhstan", "Kazahsztán"),
    ("Kosovo", "Koszovó"),
    ("Latvia", "Lettország"),
    ("Lebanon", "Libanon"),
    ("Lithuania", "Litvánia"),
    ("Luxembourg", "Luxemburg"),
    ("Malta", "Málta"),
    ("Montenegro", "Montenegró"),
    ("Morocco", "Marokkó"),
    ("Netherlands", "Hollandia"),
    ("North Macedonia", "Észak-Macedónia"),
    ("Norway", "Norvégia"),
    ("Poland", "Lengyelország"),
    ("Portugal", "Portugália"),
    ("Romania", "Románia"),
    ("Russia", "Oroszország"),
    ("Serbia", "Szerbia"),
    ("Slovakia", "Szlovákia"),
    ("Slovenia", "Szlovénia"),
    ("Spain", "Spanyolország"),
    ("Sweden", "Svédország"),
    ("Switzerland", "Svájc"),
    ("Tunisia", "Tunézia"),
    ("Turkey", "Törökország"),
    ("Türkiye", "Törökország"),
    ("Ukraine", "Ukrajna"),
    ("United Arab Emirates", "Egyesült Arab Emírségek"),
    ("UAE", "Egyesült Arab Emírségek"),
    ("United Kingdom", "Egyesült Királyság"),
    ("UK", "Egyesült Királyság"),
    ("Vatican", "Vatikán"),
];

const HU_CITIES: &[(&str, &str)] = &[
    ("Rome", "Róma"),
    ("Milan", "Milánó"),
    ("Venice", "Velence"),
    ("Florence", "Firenze"),
    ("Naples", "Nápoly"),
    ("Vienna", "Bécs"),
    ("Prague", "Prága"),
    ("Warsaw", "Varsó"),
    ("Krakow", "Krakkó"),
    ("Cracow", "Krakkó"),
    ("Munich", "München"),
    ("Cologne", "Köln"),
    ("Paris", "Párizs"),
    ("Nice", "Nizza"),
    ("Amsterdam", "Amszterdam"),
    ("Brussels", "Brüsszel"),
    ("Lisbon", "Lisszabon"),
    ("Seville", "Sevilla"),
    ("Athens", "Athén"),
    ("Thessaloniki", "Szaloniki"),
    ("Copenhagen", "Koppenhága"),
    ("Reykjavik", "Reykjavík"),
    ("Bucharest", "Bukarest"),
    ("Sofia", "Szófia"),
    ("Belgrade", "Belgrád"),
    ("Zagreb", "Zágráb"),
    ("Bratislava", "Pozsony"),
    ("Moscow", "Moszkva"),
    ("St. Petersburg", "Szentpétervár"),
    ("Saint Petersburg", "Szentpétervár"),
    ("Kiev", "Kijev"),
    ("Kyiv", "Kijev"),
    ("Istanbul", "Isztambul"),
    ("Tel Aviv", "Tel-Aviv"),
    ("Cairo", "Kairó"),
    ("Marrakech", "Marrakesh"),
    ("Dubai", "Dubaj"),
    ("Skopje", "Szkopje"),
    ("Sarajevo", "Szarajevó"),
    ("Chisinau", "Kisinyov"),
    ("Tbilisi", "Tbiliszi"),
    ("Yerevan", "Jereván"),
    ("Minsk", "Minszk"),
    ("Geneva", "Genf"),
    ("Zurich", "Zürich"),
    ("Basel", "Bázel"),
    ("Zadar", "Zára"),
    ("Gdansk", "Gdańsk"),
    ("Wroclaw", "Wrocław"),
    ("Poznan", "Poznań"),
    ("Palma", "Palma de Mallorca"),
    ("Turin", "Torino"),
    ("Malta", "Málta"),
    ("Luxembourg", "Luxemburg"),
];

const HU_REGIONS: &[(&str, &str)] = &[
    ("Europe", "Európa"),
    ("Asia", "Ázsia"),
    ("Africa", "Afrika"),
    ("North America", "Észak-Amerika"),
    ("South America", "Dél-Amerika"),
    ("Oceania", "Óceánia"),
    ("Southern Europe", "Dél-Európa"),
    ("Western Europe", "Nyugat-Európa"),
    ("Northern Europe", "Észak-Európa"),
    ("Eastern Europe", "Kelet-Európa"),
    ("Western Asia", "Nyugat-Ázsia"),
    ("Southern Asia", "Dél-Ázsia"),
    ("Eastern Asia", "Kelet-Ázsia"),
    ("South-Eastern Asia", "Délkelet-Ázsia"),
    ("Northern Africa", "Észak-Afrika"),
    ("Eastern Africa", "Kelet-Afrika"),
    ("Southern Africa", "Dél-Afrika"),
    ("Middle East", "Közel-Kelet"),
];
