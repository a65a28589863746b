//! SPARQL query texts and coordinate properties for the two knowledge
//! bases.

/// Maker spaces on Wikidata: instances of "makerspace" (Q45820240)
/// located in Munich (Q1726).
pub const WIKIDATA_MAKERSPACES: &str = "
SELECT ?item WHERE {
  ?item wdt:P31 wd:Q45820240;
  wdt:P131 wd:Q1726.
}
";

/// Coordinate-location property on Wikidata.
pub const WIKIDATA_COORDINATES: &str = "P625";

/// Garage42 workshops on the FLMR Wikibase: every item with P1 = Q12.
pub const G42_WORKSHOPS: &str = "
PREFIX flmd: <https://flmr-db.wikibase.cloud/entity/>
PREFIX flmdt: <https://flmr-db.wikibase.cloud/prop/direct/>

select ?item where {
    ?item flmdt:P1 flmd:Q12
}
";

/// Coordinate property on the FLMR Wikibase.
pub const G42_COORDINATES: &str = "P13";
