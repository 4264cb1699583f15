//! Average step inputs.

/// Four millimetre members: 1, 2, 3 and 6.
pub const AVERAGE_FOUR_MEMBERS: &str = r#"
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix qudt:   <http://qudt.org/schema/qudt/> .
@prefix unit:   <http://qudt.org/vocab/unit/> .
@prefix p-plan: <http://purl.org/net/p-plan#> .

<#avg> a prov:Activity ;
    prov:used <#values> .

<#values> a prov:Collection ;
    p-plan:correspondsToVariable <#varValues> ;
    prov:hadMember <#m1>, <#m2>, <#m3>, <#m4> .

<#m1> a qudt:QuantityValue ; qudt:numericValue 1.0 ; qudt:unit unit:MilliM .
<#m2> a qudt:QuantityValue ; qudt:numericValue 2.0 ; qudt:unit unit:MilliM .
<#m3> a qudt:QuantityValue ; qudt:numericValue 3.0 ; qudt:unit unit:MilliM .
<#m4> a qudt:QuantityValue ; qudt:numericValue 6.0 ; qudt:unit unit:MilliM .
"#;

/// Plain `rdf:value` members; the unit is declared on the collection.
pub const AVERAGE_PLAIN_MEMBERS: &str = r#"
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix qudt:   <http://qudt.org/schema/qudt/> .
@prefix unit:   <http://qudt.org/vocab/unit/> .
@prefix p-plan: <http://purl.org/net/p-plan#> .

<#avg> a prov:Activity ; prov:used <#values>, <#config> .

<#values> a prov:Collection ;
    qudt:unit unit:KiloGM ;
    p-plan:correspondsToVariable <#varValues> ;
    prov:hadMember <#m1>, <#m2> .

<#config> a prov:Collection .

<#m1> a prov:Entity ; rdf:value "10" .
<#m2> a prov:Entity ; rdf:value 15 .
"#;

/// A qualifying collection without members.
pub const AVERAGE_EMPTY_COLLECTION: &str = r#"
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix p-plan: <http://purl.org/net/p-plan#> .

<#avg> a prov:Activity ; prov:used <#values> .
<#values> a prov:Collection ; p-plan:correspondsToVariable <#varValues> .
"#;

/// The used collection is not bound to a plan variable.
pub const AVERAGE_NO_COLLECTION: &str = r#"
@prefix prov: <http://www.w3.org/ns/prov#> .
@prefix qudt: <http://qudt.org/schema/qudt/> .

<#avg> a prov:Activity ; prov:used <#values> .
<#values> a prov:Collection ; prov:hadMember <#m1> .
<#m1> a qudt:QuantityValue ; qudt:numericValue 1.0 .
"#;

/// Members in different units.
pub const AVERAGE_MIXED_UNITS: &str = r#"
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix qudt:   <http://qudt.org/schema/qudt/> .
@prefix unit:   <http://qudt.org/vocab/unit/> .
@prefix p-plan: <http://purl.org/net/p-plan#> .

<#avg> a prov:Activity ; prov:used <#values> .
<#values> a prov:Collection ;
    p-plan:correspondsToVariable <#varValues> ;
    prov:hadMember <#m1>, <#m2> .
<#m1> a qudt:QuantityValue ; qudt:numericValue 1.0 ; qudt:unit unit:GM .
<#m2> a qudt:QuantityValue ; qudt:numericValue 2.0 ; qudt:unit unit:KiloGM .
"#;

/// A member with neither `qudt:numericValue` nor `rdf:value`.
pub const AVERAGE_VALUELESS_MEMBER: &str = r#"
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix qudt:   <http://qudt.org/schema/qudt/> .
@prefix p-plan: <http://purl.org/net/p-plan#> .

<#avg> a prov:Activity ; prov:used <#values> .
<#values> a prov:Collection ;
    p-plan:correspondsToVariable <#varValues> ;
    prov:hadMember <#m1>, <#m2> .
<#m1> a qudt:QuantityValue ; qudt:numericValue 1.0 .
<#m2> a qudt:QuantityValue .
"#;

/// One member's value is text.
pub const AVERAGE_NON_NUMERIC_MEMBER: &str = r#"
@prefix rdf:    <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix qudt:   <http://qudt.org/schema/qudt/> .
@prefix p-plan: <http://purl.org/net/p-plan#> .

<#avg> a prov:Activity ; prov:used <#values> .
<#values> a prov:Collection ;
    p-plan:correspondsToVariable <#varValues> ;
    prov:hadMember <#m1>, <#m2> .
<#m1> a qudt:QuantityValue ; qudt:numericValue 1.0 .
<#m2> a prov:Entity ; rdf:value "n/a" .
"#;

/// Two members near the largest finite double.
pub const AVERAGE_LARGE_MEMBERS: &str = r#"
@prefix prov:   <http://www.w3.org/ns/prov#> .
@prefix qudt:   <http://qudt.org/schema/qudt/> .
@prefix p-plan: <http://purl.org/net/p-plan#> .

<#avg> a prov:Activity ; prov:used <#values> .
<#values> a prov:Collection ;
    p-plan:correspondsToVariable <#varValues> ;
    prov:hadMember <#m1>, <#m2> .
<#m1> a qudt:QuantityValue ; qudt:numericValue 1.5e308 .
<#m2> a qudt:QuantityValue ; qudt:numericValue 1.5e308 .
"#;
