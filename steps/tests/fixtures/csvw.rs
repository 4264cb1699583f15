//! CSVW column loader inputs and documents.

/// Where [`CSVW_METADATA`] is served.
pub const METADATA_URL: &str = "https://data.example.org/run/measurements.json";

/// Where [`CSVW_DATA`] is served; the metadata references it relatively.
pub const DATA_URL: &str = "https://data.example.org/run/data/measurements.csv";

/// Activity with a metadata URI input and a column name input.
pub const CSVW_LOAD_LENGTH: &str = r#"
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix p-plan: <http://purl.org/net/p-plan#> .
@prefix bfo:    <https://example.org/bfo/> .

<#load> a prov:Activity .

<#metadataInput> a prov:Entity ;
    bfo:is_input_of <#load> ;
    p-plan:correspondsToVariable <#varMetadata> ;
    rdf:value "https://data.example.org/run/measurements.json" .

<#columnInput> a prov:Entity ;
    bfo:is_input_of <#load> ;
    p-plan:correspondsToVariable <#varColumn> ;
    rdf:value "length" .

<#varMetadata> a p-plan:Variable ; rdfs:label "CSVW Metadata URI" .
<#varColumn> a p-plan:Variable ; rdfs:label "Column Name" .
"#;

/// Same shape, selecting the text column by its title.
pub const CSVW_LOAD_NOTE: &str = r#"
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix p-plan: <http://purl.org/net/p-plan#> .
@prefix bfo:    <https://example.org/bfo/> .

<#load> a prov:Activity .
<#metadataInput> bfo:is_input_of <#load> ;
    p-plan:correspondsToVariable <#varMetadata> ;
    rdf:value "https://data.example.org/run/measurements.json" .
<#columnInput> bfo:is_input_of <#load> ;
    p-plan:correspondsToVariable <#varColumn> ;
    rdf:value "Remark" .
<#varMetadata> rdfs:label "metadata" .
<#varColumn> rdfs:label "column" .
"#;

/// Asks for a column the metadata does not describe.
pub const CSVW_UNKNOWN_COLUMN: &str = r#"
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix p-plan: <http://purl.org/net/p-plan#> .
@prefix bfo:    <https://example.org/bfo/> .

<#load> a prov:Activity .
<#metadataInput> bfo:is_input_of <#load> ;
    p-plan:correspondsToVariable <#varMetadata> ;
    rdf:value "https://data.example.org/run/measurements.json" .
<#columnInput> bfo:is_input_of <#load> ;
    p-plan:correspondsToVariable <#varColumn> ;
    rdf:value "width" .
<#varMetadata> rdfs:label "metadata" .
<#varColumn> rdfs:label "column" .
"#;

/// Two inputs whose variables say nothing about their role.
pub const CSVW_UNLABELLED_INPUTS: &str = r#"
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix p-plan: <http://purl.org/net/p-plan#> .
@prefix bfo:    <https://example.org/bfo/> .

<#load> a prov:Activity .
<#first> bfo:is_input_of <#load> ; p-plan:correspondsToVariable <#v1> ; rdf:value "a" .
<#second> bfo:is_input_of <#load> ; p-plan:correspondsToVariable <#v2> ; rdf:value "b" .
<#v1> rdfs:label "left" .
<#v2> rdfs:label "right" .
"#;

/// Only the metadata input.
pub const CSVW_ONE_INPUT: &str = r#"
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs:   <http://www.w3.org/2000/01/rdf-schema#> .
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix p-plan: <http://purl.org/net/p-plan#> .
@prefix bfo:    <https://example.org/bfo/> .

<#load> a prov:Activity .
<#metadataInput> bfo:is_input_of <#load> ;
    p-plan:correspondsToVariable <#varMetadata> ;
    rdf:value "https://data.example.org/run/measurements.json" .
<#varMetadata> rdfs:label "metadata" .
"#;

/// Table metadata with a relative CSV location.
pub const CSVW_METADATA: &str = r#"{
  "@context": "http://www.w3.org/ns/csvw",
  "tables": [
    {
      "url": "data/measurements.csv",
      "tableSchema": {
        "columns": [
          { "name": "id", "titles": "ID" },
          { "name": "length", "titles": ["Length", "Länge"], "dc:unit": "MM" },
          { "name": "note", "titles": "Remark" }
        ]
      }
    }
  ]
}"#;

/// The described CSV file.
pub const CSVW_DATA: &str = "id,length,note\n1,2.5,ok\n2, 3.5 ,\"needs check\"\n3,\"4\",42\n";
