use std::collections::HashSet;

use attom_mcp_server::features::mcp::schemas::build_tool_schemas;
use jsonschema::JSONSchema;
use serde_json::json;

#[test]
fn every_tool_is_registered_once() {
    let (definitions, input_schemas) = build_tool_schemas();

    let names: HashSet<_> = definitions.iter().map(|tool| tool.name.as_str()).collect();
    assert_eq!(definitions.len(), 47);
    assert_eq!(names.len(), definitions.len());
    assert_eq!(input_schemas.len(), definitions.len());

    for expected in [
        "property_detail",
        "building_permits",
        "sales_comparables",
        "boundary_detail",
        "geocode_legacy_lookup",
        "poi_search",
        "poi_category_lookup",
        "neighborhood_community",
        "school_search",
    ] {
        assert!(names.contains(expected), "{expected} missing");
    }
}

#[test]
fn schemas_compile_and_reject_unknown_fields() {
    let (definitions, input_schemas) = build_tool_schemas();

    for tool in &definitions {
        let schema = &input_schemas[&tool.name];
        assert_eq!(schema["additionalProperties"], json!(false), "{}", tool.name);
        assert!(tool.output_schema.is_some());

        let compiled = JSONSchema::compile(schema).expect("schema compiles");
        assert!(compiled.is_valid(&json!({})));
        assert!(!compiled.is_valid(&json!({ "not_a_field": 1 })));
    }
}

#[test]
fn property_tools_describe_identifier_forms() {
    let (definitions, input_schemas) = build_tool_schemas();

    let detail = definitions
        .iter()
        .find(|tool| tool.name == "property_detail")
        .expect("property_detail present");
    assert_eq!(detail.title, "Property: Detail");
    assert!(detail.description.contains("fips+apn"));

    let schema = JSONSchema::compile(&input_schemas["property_detail"]).expect("compiles");
    assert!(schema.is_valid(&json!({ "attom_id": "145423726" })));
    assert!(!schema.is_valid(&json!({ "attom_id": 145423726 })));
}

#[test]
fn enumerations_and_bounds_are_enforced() {
    let (_, input_schemas) = build_tool_schemas();

    let school = JSONSchema::compile(&input_schemas["school_search"]).expect("compiles");
    assert!(school.is_valid(&json!({ "geoid_v4": "x", "school_type": "Charter" })));
    assert!(!school.is_valid(&json!({ "geoid_v4": "x", "school_type": "College" })));
    assert!(!school.is_valid(&json!({ "geoid_v4": "x", "radius": 0 })));

    let poi = JSONSchema::compile(&input_schemas["poi_search"]).expect("compiles");
    assert!(poi.is_valid(&json!({ "zipcode": "92802", "page_size": 500 })));
    assert!(!poi.is_valid(&json!({ "zipcode": "92802", "page_size": 501 })));

    let boundary = JSONSchema::compile(&input_schemas["boundary_detail"]).expect("compiles");
    assert!(!boundary.is_valid(&json!({ "area_id": "CO06059", "format": "kml" })));
}
