#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyEndpoint {
    pub tool: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

const fn endpoint(
    tool: &'static str,
    path: &'static str,
    title: &'static str,
    description: &'static str,
) -> PropertyEndpoint {
    PropertyEndpoint {
        tool,
        path,
        title,
        description,
    }
}

pub const PROPERTY_DETAIL: PropertyEndpoint = endpoint(
    "property_detail",
    "property/detail",
    "Property: Detail",
    "Get property detail information.",
);

pub const PROPERTY_SNAPSHOT: PropertyEndpoint = endpoint(
    "property_snapshot",
    "property/snapshot",
    "Property: Snapshot",
    "Get basic property snapshot information.",
);

pub const PROPERTY_SEARCH_PATH: &str = "property/id";

pub const PROPERTY_ENDPOINTS: &[PropertyEndpoint] = &[
    endpoint(
        "property_address",
        "property/address",
        "Property: Address",
        "Get property address information.",
    ),
    PROPERTY_DETAIL,
    endpoint(
        "property_basic_profile",
        "property/basicprofile",
        "Property: Basic profile",
        "Get property basic profile information.",
    ),
    endpoint(
        "property_expanded_profile",
        "property/expandedprofile",
        "Property: Expanded profile",
        "Get property expanded profile information.",
    ),
    endpoint(
        "property_detail_with_schools",
        "property/detailwithschools",
        "Property: Detail with schools",
        "Get property detail with schools information.",
    ),
    endpoint(
        "property_basic_history",
        "saleshistory/basichistory",
        "Property: Basic history",
        "Get property basic sales history information.",
    ),
    endpoint(
        "property_building_permits",
        "property/buildingpermits",
        "Property: Building permits",
        "Get property building permits information.",
    ),
    endpoint(
        "property_detail_mortgage",
        "property/detailmortgage",
        "Property: Detail with mortgage",
        "Get property detail mortgage information.",
    ),
    endpoint(
        "property_detail_owner",
        "property/detailowner",
        "Property: Detail with owner",
        "Get property detail owner information.",
    ),
    endpoint(
        "property_detail_mortgage_owner",
        "property/detailmortgageowner",
        "Property: Detail with mortgage and owner",
        "Get property detail mortgage owner information.",
    ),
    endpoint(
        "property_expanded_history",
        "saleshistory/expandedhistory",
        "Property: Expanded history",
        "Get property expanded sales history information.",
    ),
    endpoint(
        "building_permits",
        "property/BuildingPermits",
        "Building permits",
        "Get building permits information.",
    ),
    endpoint(
        "property_id_search_sort",
        PROPERTY_SEARCH_PATH,
        "Property: ID search",
        "Get property id search sort information.",
    ),
    PROPERTY_SNAPSHOT,
    endpoint(
        "avm_detail",
        "avm/detail",
        "Valuation: AVM detail",
        "Get detailed AVM (Automated Valuation Model) information.",
    ),
    endpoint(
        "avm_snapshot",
        "avm/snapshot",
        "Valuation: AVM snapshot",
        "Get AVM snapshot information.",
    ),
    endpoint(
        "avm_history_detail",
        "avmhistory/detail",
        "Valuation: AVM history",
        "Get AVM history detail information.",
    ),
    endpoint(
        "attom_avm_detail",
        "attomavm/detail",
        "Valuation: ATTOM AVM detail",
        "Get ATTOM AVM detail information.",
    ),
    endpoint(
        "home_equity",
        "valuation/homeequity",
        "Valuation: Home equity",
        "Get home equity valuation information.",
    ),
    endpoint(
        "rental_avm",
        "valuation/rentalavm",
        "Valuation: Rental AVM",
        "Get rental AVM information.",
    ),
    endpoint(
        "assessment_detail",
        "assessment/detail",
        "Assessment: Detail",
        "Get detailed assessment information for a property.",
    ),
    endpoint(
        "assessment_snapshot",
        "assessment/snapshot",
        "Assessment: Snapshot",
        "Get assessment snapshot information.",
    ),
    endpoint(
        "assessment_history_detail",
        "assessmenthistory/detail",
        "Assessment: History",
        "Get assessment history detail information.",
    ),
    endpoint(
        "sale_detail",
        "sale/detail",
        "Sales: Detail",
        "Get detailed sales information for a property.",
    ),
    endpoint(
        "sale_snapshot",
        "sale/snapshot",
        "Sales: Snapshot",
        "Get sales snapshot information.",
    ),
    endpoint(
        "sales_history_detail",
        "saleshistory/detail",
        "Sales: History detail",
        "Get sales history detail information.",
    ),
    endpoint(
        "sales_history_snapshot",
        "saleshistory/snapshot",
        "Sales: History snapshot",
        "Get sales history snapshot information.",
    ),
    endpoint(
        "sales_comparables",
        "salescomparables/",
        "Sales: Comparables",
        "Get sales comparables information.",
    ),
    endpoint(
        "all_events_detail",
        "allevents/detail",
        "Events: All events detail",
        "Get all events detail information.",
    ),
    endpoint(
        "all_events_snapshot",
        "allevents/snapshot",
        "Events: All events snapshot",
        "Get all events snapshot information.",
    ),
    endpoint(
        "enumerations_detail",
        "enumerations/Detail",
        "Misc: Enumerations",
        "Get enumerations detail information including field definitions and valid values.",
    ),
    endpoint(
        "transportation_noise",
        "transportationnoise",
        "Misc: Transportation noise",
        "Get transportation noise levels from airports, highways, and railways for a property.",
    ),
    endpoint(
        "preforeclosure_details",
        "preforeclosuredetails",
        "Misc: Preforeclosure details",
        "Get preforeclosure status, timeline, and related data for a property.",
    ),
];

pub fn find_endpoint(tool: &str) -> Option<&'static PropertyEndpoint> {
    PROPERTY_ENDPOINTS.iter().find(|endpoint| endpoint.tool == tool)
}

pub fn find_endpoint_by_path(path: &str) -> Option<&'static PropertyEndpoint> {
    PROPERTY_ENDPOINTS.iter().find(|endpoint| endpoint.path == path)
}
