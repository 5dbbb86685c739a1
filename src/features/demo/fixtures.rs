use serde_json::{Value, json};

pub const DEMO_ATTOM_ID: &str = "145423726";
pub const DEMO_COMMUNITY_GEOID: &str = "08f3762070941bf29ff66a3927612f05";
pub const DEMO_DISTRICT_GEOID: &str = "8370d93a17ba7fb07f115392bd1225d9";

pub fn property() -> Value {
    json!({
        "attomId": DEMO_ATTOM_ID,
        "property_id": DEMO_ATTOM_ID,
        "address": {
            "line1": "7804 N MILTON ST",
            "line2": "SPOKANE, WA 99208",
            "city": "SPOKANE",
            "state": "WA",
            "postal_code": "99208",
            "county": "SPOKANE"
        },
        "property_type": "SINGLE FAMILY RESIDENCE",
        "year_built": 1994,
        "beds": 3,
        "baths": 2.5,
        "universal_size": 1800,
        "lot_size": 0.25,
        "legal_description": "LOT 5 BLOCK 2 MILTON ADDITION",
        "owner_name": "JOHN DOE",
        "owner_occupied": true,
        "tax_id": "12345",
        "apn": "26252.2605",
        "fips": "53063",
        "assessments": [
            {
                "tax_year": 2022,
                "assessed_value_land": 80000,
                "assessed_value_improvement": 220000,
                "assessed_value_total": 300000
            }
        ],
        "sales_history": [
            {
                "sale_date": "2020-06-15",
                "sale_price": 275000,
                "sale_type": "RESALE",
                "buyer_name": "JOHN DOE",
                "seller_name": "JANE SMITH"
            }
        ],
        "avm": {
            "value": 310000,
            "high": 325000,
            "low": 295000,
            "confidence_score": 85
        }
    })
}

fn snapshot_of(property: &Value) -> Value {
    let mut snapshot = serde_json::Map::new();
    for key in [
        "attomId",
        "property_id",
        "address",
        "property_type",
        "year_built",
        "beds",
        "baths",
        "universal_size",
        "lot_size",
    ] {
        if let Some(value) = property.get(key) {
            snapshot.insert(key.to_string(), value.clone());
        }
    }
    Value::Object(snapshot)
}

pub fn property_snapshot() -> Value {
    snapshot_of(&property())
}

pub fn property_snapshots() -> Vec<Value> {
    vec![
        property_snapshot(),
        json!({
            "attomId": "158832785",
            "property_id": "158832785",
            "address": {
                "line1": "15530 N TATUM BLVD",
                "line2": "PHOENIX, AZ 85032",
                "city": "PHOENIX",
                "state": "AZ",
                "postal_code": "85032",
                "county": "MARICOPA"
            },
            "property_type": "CONDOMINIUM",
            "year_built": 2005,
            "beds": 2,
            "baths": 2.0,
            "universal_size": 1200,
            "lot_size": 0.1
        }),
    ]
}

fn section_of(property: &Value, key: &str) -> Value {
    let mut section = serde_json::Map::new();
    section.insert("attomId".to_string(), json!(DEMO_ATTOM_ID));
    section.insert(
        key.to_string(),
        property.get(key).cloned().unwrap_or(Value::Null),
    );
    Value::Object(section)
}

pub fn property_projection(path: &str) -> Value {
    let property = property();

    match path {
        "property/snapshot" | "property/address" | "property/basicprofile" => {
            snapshot_of(&property)
        }
        _ if path.starts_with("avm")
            || path.starts_with("attomavm")
            || path.starts_with("valuation/") =>
        {
            section_of(&property, "avm")
        }
        _ if path.starts_with("assessment") => section_of(&property, "assessments"),
        _ if path.starts_with("sale") => section_of(&property, "sales_history"),
        _ => property,
    }
}

pub fn boundary(format: &str) -> Value {
    json!({
        "area_id": "CO06059",
        "geo_id_v4": "baa5d7de09afdefd0ffcd66b581991de",
        "name": "ORANGE COUNTY",
        "type": "CO",
        "format": format,
        "centroid": { "latitude": 33.7175, "longitude": -117.8311 },
        "boundary": {
            "type": "Polygon",
            "coordinates": [[
                [-118.1253, 33.9471],
                [-117.4126, 33.9471],
                [-117.4126, 33.3862],
                [-118.1253, 33.3862],
                [-118.1253, 33.9471]
            ]]
        }
    })
}

pub fn hierarchy_levels() -> Vec<Value> {
    vec![
        json!({
            "geo_id": "ST06",
            "geo_id_v4": "e48f70f22d03db973e32c92ca268f891",
            "name": "CALIFORNIA",
            "type": "ST"
        }),
        json!({
            "geo_id": "CO06059",
            "geo_id_v4": "baa5d7de09afdefd0ffcd66b581991de",
            "name": "ORANGE COUNTY",
            "type": "CO"
        }),
        json!({
            "geo_id": "CI0603526",
            "geo_id_v4": "07991e1ba28ff61117434d9a073c4360",
            "name": "ANAHEIM",
            "type": "CI"
        }),
        json!({
            "geo_id": "ZI92802",
            "geo_id_v4": "d87a509d9fc19bbafc4cee730988a18e",
            "name": "92802",
            "type": "ZI"
        }),
        json!({
            "geo_id": "NB060591401",
            "geo_id_v4": DEMO_COMMUNITY_GEOID,
            "name": "ANAHEIM RESORT",
            "type": "NB"
        }),
    ]
}

pub fn hierarchy() -> Value {
    json!({ "hierarchy": hierarchy_levels() })
}

pub fn state() -> Value {
    json!({
        "geo_id": "ST06",
        "geo_id_v4": "e48f70f22d03db973e32c92ca268f891",
        "name": "CALIFORNIA",
        "abbreviation": "CA",
        "fips": "06"
    })
}

pub fn counties() -> Vec<Value> {
    vec![
        json!({
            "geo_id": "CO06059",
            "geo_id_v4": "baa5d7de09afdefd0ffcd66b581991de",
            "name": "ORANGE COUNTY",
            "state_id": "ST06",
            "fips": "06059"
        }),
        json!({
            "geo_id": "CO06037",
            "geo_id_v4": "8a71def89a0c73c7b632ade348cec4f9",
            "name": "LOS ANGELES COUNTY",
            "state_id": "ST06",
            "fips": "06037"
        }),
    ]
}

pub fn cbsas() -> Vec<Value> {
    vec![json!({
        "geo_id": "CB31080",
        "name": "LOS ANGELES-LONG BEACH-ANAHEIM, CA",
        "state_id": "ST06",
        "type": "CB"
    })]
}

pub fn pois() -> Vec<Value> {
    vec![
        json!({
            "poi_id": "12345",
            "name": "Starbucks",
            "address": "1234 Main St, Anaheim, CA 92802",
            "latitude": 33.8121,
            "longitude": -117.9190,
            "distance": 0.3,
            "category": {
                "category_id": "5812",
                "category_name": "RESTAURANT",
                "line_of_business": "FOOD SERVICES",
                "industry_name": "RETAIL TRADE"
            }
        }),
        json!({
            "poi_id": "67890",
            "name": "Target",
            "address": "5678 Harbor Blvd, Anaheim, CA 92802",
            "latitude": 33.8036,
            "longitude": -117.9145,
            "distance": 0.8,
            "category": {
                "category_id": "5311",
                "category_name": "DEPARTMENT STORE",
                "line_of_business": "SHOPPING",
                "industry_name": "RETAIL TRADE"
            }
        }),
    ]
}

pub fn poi_categories() -> Vec<Value> {
    [
        ("5812", "RESTAURANT", "FOOD SERVICES", "RETAIL TRADE"),
        ("5311", "DEPARTMENT STORE", "SHOPPING", "RETAIL TRADE"),
        ("6512", "REAL ESTATE", "REAL ESTATE", "FINANCE"),
        ("8211", "SCHOOL", "EDUCATION", "SERVICES"),
        ("7992", "PARK", "RECREATION", "SERVICES"),
    ]
    .into_iter()
    .map(|(id, name, business, industry)| {
        json!({
            "category_id": id,
            "category_name": name,
            "line_of_business": business,
            "industry_name": industry
        })
    })
    .collect()
}

pub fn community() -> Value {
    json!({
        "geo_id_v4": DEMO_COMMUNITY_GEOID,
        "name": "ANAHEIM RESORT",
        "type": "NB",
        "description": "Resort district surrounding the Anaheim convention center and theme parks.",
        "demographics": {
            "population": 12500,
            "median_age": 34.2,
            "median_household_income": 68000,
            "households": 4100
        },
        "amenities": ["Convention Center", "Theme Parks", "Hotels", "Restaurants"]
    })
}

pub fn schools() -> Vec<Value> {
    vec![
        json!({
            "geo_id_v4": "9c6bded31fd0e089485f276acb947875",
            "name": "Anaheim High School",
            "school_type": "High",
            "grades": "9-12",
            "district_geo_id_v4": DEMO_DISTRICT_GEOID,
            "enrollment": 3100,
            "distance": 1.2
        }),
        json!({
            "geo_id_v4": "54dfabc123fd0e089485f276a987654",
            "name": "South Junior High School",
            "school_type": "Middle",
            "grades": "7-8",
            "district_geo_id_v4": DEMO_DISTRICT_GEOID,
            "enrollment": 1400,
            "distance": 2.1
        }),
    ]
}

pub fn school_district() -> Value {
    json!({
        "geo_id_v4": DEMO_DISTRICT_GEOID,
        "district_id": "0606720",
        "name": "Anaheim Union High School District",
        "state": "CA",
        "schools": 20,
        "enrollment": 29000
    })
}
