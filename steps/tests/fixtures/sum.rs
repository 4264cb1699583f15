//! Sum step inputs.

/// Two millimetre values, 2.0 and 3.0, feeding one activity.
pub const SUM_TWO_MILLIMETRES: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix qudt: <http://qudt.org/schema/qudt/> .
@prefix unit: <http://qudt.org/vocab/unit/> .
@prefix bfo:  <https://example.org/bfo/> .

<#add> a prov:Activity .

<#a> a qudt:QuantityValue ;
    qudt:numericValue 2.0 ;
    qudt:unit unit:MilliM ;
    bfo:is_input_of <#add> .

<#b> a qudt:QuantityValue ;
    qudt:numericValue 3.0 ;
    qudt:unit unit:MilliM ;
    bfo:is_input_of <#add> .
"#;

/// Three unitless values, one of them an integer literal.
pub const SUM_UNITLESS: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix qudt: <http://qudt.org/schema/qudt/> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix bfo:  <https://example.org/bfo/> .

<#add> a prov:Activity .
<#a> a qudt:QuantityValue ; qudt:numericValue 1.5 ; bfo:is_input_of <#add> .
<#b> a qudt:QuantityValue ; qudt:numericValue 4 ; bfo:is_input_of <#add> .
<#c> a qudt:QuantityValue ; qudt:numericValue "-0.5"^^xsd:double ; bfo:is_input_of <#add> .
<#note> bfo:is_input_of <#add> .
"#;

/// Only one quantity value is linked to the activity.
pub const SUM_ONE_INPUT: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix qudt: <http://qudt.org/schema/qudt/> .
@prefix bfo:  <https://example.org/bfo/> .

<#add> a prov:Activity .
<#a> a qudt:QuantityValue ; qudt:numericValue 2.0 ; bfo:is_input_of <#add> .
<#b> a qudt:QuantityValue ; qudt:numericValue 3.0 .
"#;

/// Millimetres and metres mixed.
pub const SUM_UNIT_MISMATCH: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix qudt: <http://qudt.org/schema/qudt/> .
@prefix unit: <http://qudt.org/vocab/unit/> .
@prefix bfo:  <https://example.org/bfo/> .

<#add> a prov:Activity .
<#a> a qudt:QuantityValue ; qudt:numericValue 2.0 ; qudt:unit unit:MilliM ; bfo:is_input_of <#add> .
<#b> a qudt:QuantityValue ; qudt:numericValue 3.0 ; qudt:unit unit:M ; bfo:is_input_of <#add> .
"#;

/// One input's value is not a number.
pub const SUM_NON_NUMERIC: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix qudt: <http://qudt.org/schema/qudt/> .
@prefix bfo:  <https://example.org/bfo/> .

<#add> a prov:Activity .
<#a> a qudt:QuantityValue ; qudt:numericValue 2.0 ; bfo:is_input_of <#add> .
<#b> a qudt:QuantityValue ; qudt:numericValue "three" ; bfo:is_input_of <#add> .
"#;

/// One input has no `qudt:numericValue`.
pub const SUM_MISSING_VALUE: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix qudt: <http://qudt.org/schema/qudt/> .
@prefix bfo:  <https://example.org/bfo/> .

<#add> a prov:Activity .
<#a> a qudt:QuantityValue ; qudt:numericValue 2.0 ; bfo:is_input_of <#add> .
<#b> a qudt:QuantityValue ; bfo:is_input_of <#add> .
"#;

/// Quantity values but no activity at all.
pub const NO_ACTIVITY: &str = r#"
@prefix qudt: <http://qudt.org/schema/qudt/> .

<#a> a qudt:QuantityValue ; qudt:numericValue 2.0 .
<#b> a qudt:QuantityValue ; qudt:numericValue 3.0 .
"#;

/// Not Turtle.
pub const MALFORMED: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .

<#add> a prov:Activity ;
    prov:used <#unterminated .
"#;

/// An activity with nothing linked to it.
pub const SUM_NO_INPUTS: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .

<#add> a prov:Activity .
"#;

/// Two values whose sum exceeds the largest finite double.
pub const SUM_OVERFLOW: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix qudt: <http://qudt.org/schema/qudt/> .
@prefix bfo:  <https://example.org/bfo/> .

<#add> a prov:Activity .
<#a> a qudt:QuantityValue ; qudt:numericValue 1e308 ; bfo:is_input_of <#add> .
<#b> a qudt:QuantityValue ; qudt:numericValue 1e308 ; bfo:is_input_of <#add> .
"#;

/// Two anonymous quantity values.
pub const SUM_BLANK_INPUTS: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix qudt: <http://qudt.org/schema/qudt/> .
@prefix unit: <http://qudt.org/vocab/unit/> .
@prefix bfo:  <https://example.org/bfo/> .

<#add> a prov:Activity .
[] a qudt:QuantityValue ; qudt:numericValue 2.0 ; qudt:unit unit:MilliM ; bfo:is_input_of <#add> .
[] a qudt:QuantityValue ; qudt:numericValue 4.0 ; qudt:unit unit:MilliM ; bfo:is_input_of <#add> .
"#;
