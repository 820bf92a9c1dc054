pub struct GetFilterOptions;
pub mod get_filter_options {
    pub const OPERATION_NAME: &str = "GetFilterOptions";
    pub const QUERY: &str = "query GetFilterOptions($type: String!) {\n    getFilterOptions(type: $type) {\n        id\n        name\n        type\n    }\n}";
    pub const QUERY_KEY: u32 = 1_879_654_433;

    use serde::{Deserialize, Serialize};

    type ID = String;

    #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
    pub struct GetFilterOptionsGetFilterOptions {
        pub id: ID,
        pub name: String,
        #[serde(rename = "type")]
        pub type_: String
    }

    #[derive(Clone, Debug, Serialize)]
    pub struct Variables {
        #[serde(rename = "type")]
        pub type_: String
    }

    #[derive(Clone, Debug, Deserialize)]
    pub struct ResponseData {
        #[serde(rename = "getFilterOptions")]
        pub get_filter_options: Vec<GetFilterOptionsGetFilterOptions>
    }
}

impl quiver::GraphQLQuery for GetFilterOptions {
    type Variables = get_filter_options::Variables;
    type ResponseData = get_filter_options::ResponseData;

    fn build_query(
        variables: Self::Variables
    ) -> (
        quiver::QueryBody<Self::Variables>,
        quiver::exchange::OperationMeta
    ) {
        (
            quiver::QueryBody {
                variables,
                query: get_filter_options::QUERY,
                operation_name: get_filter_options::OPERATION_NAME
            },
            quiver::exchange::OperationMeta {
                query_key: get_filter_options::QUERY_KEY,
                operation_type: quiver::exchange::OperationType::Query
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::get_filter_options::{ResponseData, Variables};
    use super::GetFilterOptions;
    use quiver::GraphQLQuery;

    #[test]
    fn variables_serialize_with_the_wire_field_name() {
        let variables = Variables {
            type_: "tags".to_string()
        };
        let json = serde_json::to_value(&variables).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "tags" }));
    }

    #[test]
    fn query_body_carries_operation_name_and_query_text() {
        let (body, meta) = GetFilterOptions::build_query(Variables {
            type_: "persons".to_string()
        });
        assert_eq!(body.operation_name, "GetFilterOptions");
        assert!(body.query.contains("getFilterOptions(type: $type)"));
        assert_eq!(
            meta.operation_type,
            quiver::exchange::OperationType::Query
        );
    }

    #[test]
    fn response_data_deserializes_from_the_wire_shape() {
        let raw = serde_json::json!({
            "getFilterOptions": [
                { "id": "1", "name": "Nature", "type": "tags" }
            ]
        });
        let data: ResponseData = serde_json::from_value(raw).unwrap();
        assert_eq!(data.get_filter_options.len(), 1);
        assert_eq!(data.get_filter_options[0].type_, "tags");
    }
}
