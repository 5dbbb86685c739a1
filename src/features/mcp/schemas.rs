use std::collections::HashMap;

use serde_json::{Map, Value, json};

use crate::core::pagination::{MAX_PAGE_SIZE, POI_MAX_PAGE_SIZE};
use crate::features::area::AreaLookup;
use crate::features::mcp::dto::ToolDefinition;
use crate::features::property::PROPERTY_ENDPOINTS;

pub fn build_tool_schemas() -> (Vec<ToolDefinition>, HashMap<String, Value>) {
    let mut definitions = Vec::new();
    let mut input_schemas = HashMap::new();

    for endpoint in PROPERTY_ENDPOINTS {
        push_tool(
            &mut definitions,
            &mut input_schemas,
            endpoint.tool,
            endpoint.title,
            &format!(
                "{} Identify the property by attom_id, address, address1+address2, or fips+apn.",
                endpoint.description
            ),
            object_schema(property_identifier_properties()),
        );
    }

    for lookup in AreaLookup::ALL {
        let (title, description, properties) = area_tool(lookup);
        push_tool(
            &mut definitions,
            &mut input_schemas,
            lookup.tool(),
            title,
            description,
            object_schema(properties),
        );
    }

    push_tool(
        &mut definitions,
        &mut input_schemas,
        "poi_search",
        "POI: Search",
        "Search points of interest around a location given by address, point, latitude+longitude, or zipcode.",
        object_schema(vec![
            ("address", string()),
            ("point", string()),
            ("latitude", number()),
            ("longitude", number()),
            ("zipcode", string()),
            ("radius", radius()),
            ("category_name", string()),
            ("line_of_business_name", string()),
            ("industry_name", string()),
            ("category_id", string()),
            ("page", page()),
            ("page_size", page_size(POI_MAX_PAGE_SIZE)),
        ]),
    );

    push_tool(
        &mut definitions,
        &mut input_schemas,
        "poi_category_lookup",
        "POI: Category lookup",
        "List point-of-interest categories, optionally filtered by category, line of business, or industry.",
        object_schema(vec![
            ("category", string()),
            ("line_of_business", string()),
            ("industry", string()),
            ("page", page()),
            ("page_size", page_size(MAX_PAGE_SIZE)),
        ]),
    );

    push_tool(
        &mut definitions,
        &mut input_schemas,
        "neighborhood_community",
        "Community: Neighborhood profile",
        "Get demographics and amenities for the neighborhood identified by geoid_v4.",
        object_schema(vec![("geoid_v4", string())]),
    );

    push_tool(
        &mut definitions,
        &mut input_schemas,
        "school_profile",
        "School: Profile",
        "Get the profile of the school identified by geoid_v4.",
        object_schema(vec![("geoid_v4", string())]),
    );

    push_tool(
        &mut definitions,
        &mut input_schemas,
        "school_district",
        "School: District",
        "Get the school district identified by geoid_v4.",
        object_schema(vec![("geoid_v4", string())]),
    );

    push_tool(
        &mut definitions,
        &mut input_schemas,
        "school_search",
        "School: Search",
        "Search schools by geoid_v4 or latitude+longitude, optionally within a radius and by school type.",
        object_schema(vec![
            ("geoid_v4", string()),
            ("latitude", number()),
            ("longitude", number()),
            ("radius", radius()),
            (
                "school_type",
                json!({
                    "type": "string",
                    "enum": ["Elementary", "Middle", "High", "Charter", "Private", "Public"]
                }),
            ),
            ("page", page()),
            ("page_size", page_size(MAX_PAGE_SIZE)),
        ]),
    );

    (definitions, input_schemas)
}

pub fn envelope_output_schema() -> Value {
    json!({
        "type": "object",
        "required": ["status"],
        "properties": {
            "status": {"type": "string", "enum": ["success", "error"]},
            "data": {},
            "code": {"type": "integer"},
            "message": {"type": "string"}
        }
    })
}

fn area_tool(lookup: AreaLookup) -> (&'static str, &'static str, Vec<(&'static str, Value)>) {
    match lookup {
        AreaLookup::Boundary => (
            "Area: Boundary detail",
            "Get the boundary of an area identified by geoid_v4 or area_id.",
            vec![
                ("geoid_v4", string()),
                ("area_id", string()),
                ("format", json!({"type": "string", "enum": ["geojson", "wkt"]})),
                ("mime", string()),
            ],
        ),
        AreaLookup::Hierarchy => (
            "Area: Hierarchy lookup",
            "Get the geographic hierarchy containing latitude+longitude or a WKT geometry.",
            vec![
                ("latitude", number()),
                ("longitude", number()),
                ("wkt_string", string()),
                ("geo_type", string()),
                ("mime", string()),
            ],
        ),
        AreaLookup::State => (
            "Area: State lookup",
            "Look up states.",
            vec![
                ("geoid_v4", string()),
                ("area_id", string()),
                ("mime", string()),
                ("page", page()),
                ("page_size", page_size(MAX_PAGE_SIZE)),
            ],
        ),
        AreaLookup::County => (
            "Area: County lookup",
            "Look up counties by state_id or geoid_v4.",
            vec![
                ("state_id", string()),
                ("geoid_v4", string()),
                ("mime", string()),
                ("page", page()),
                ("page_size", page_size(MAX_PAGE_SIZE)),
            ],
        ),
        AreaLookup::Cbsa => (
            "Area: CBSA lookup",
            "Look up core based statistical areas.",
            vec![
                ("state_id", string()),
                ("geoid_v4", string()),
                ("mime", string()),
                ("page", page()),
                ("page_size", page_size(MAX_PAGE_SIZE)),
            ],
        ),
        AreaLookup::GeoId => (
            "Area: GeoID lookup",
            "Look up geographies by geo_id, geoid_v4, or geo_type.",
            vec![
                ("geo_id", string()),
                ("geoid_v4", string()),
                ("geo_type", string()),
                ("mime", string()),
                ("page", page()),
                ("page_size", page_size(MAX_PAGE_SIZE)),
            ],
        ),
        AreaLookup::LegacyGeoId => (
            "Area: Legacy GeoID lookup",
            "Translate between legacy geo_id values and geoid_v4.",
            vec![("geo_id", string()), ("geoid_v4", string())],
        ),
        AreaLookup::Location => (
            "Area: Location lookup",
            "Find locations by geoid_v4, name, or geography type abbreviation.",
            vec![
                ("geoid_v4", string()),
                ("name", string()),
                ("geography_type_abbreviation", string()),
                ("geo_type", string()),
                ("page", page()),
                ("page_size", page_size(MAX_PAGE_SIZE)),
            ],
        ),
    }
}

fn property_identifier_properties() -> Vec<(&'static str, Value)> {
    vec![
        ("attom_id", string()),
        ("address", string()),
        ("address1", string()),
        ("address2", string()),
        ("fips", string()),
        ("apn", string()),
    ]
}

fn object_schema(properties: Vec<(&'static str, Value)>) -> Value {
    let properties: Map<String, Value> = properties
        .into_iter()
        .map(|(name, schema)| (name.to_string(), schema))
        .collect();
    json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": false
    })
}

fn string() -> Value {
    json!({"type": "string"})
}

fn number() -> Value {
    json!({"type": "number"})
}

fn radius() -> Value {
    json!({"type": "number", "exclusiveMinimum": 0})
}

fn page() -> Value {
    json!({"type": "integer", "minimum": 1})
}

fn page_size(max: u32) -> Value {
    json!({"type": "integer", "minimum": 1, "maximum": max})
}

fn push_tool(
    definitions: &mut Vec<ToolDefinition>,
    input_schemas: &mut HashMap<String, Value>,
    name: &str,
    title: &str,
    description: &str,
    input_schema: Value,
) {
    input_schemas.insert(name.to_string(), input_schema.clone());
    definitions.push(ToolDefinition {
        name: name.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        input_schema,
        output_schema: Some(envelope_output_schema()),
    });
}
