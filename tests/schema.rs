/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#[cfg(feature = "schemars")]
#[test]
fn parse_outcome_schema() {
    use fits_units::ParseOutcome;
    use schemars::schema_for;
    use serde_json::json;

    let schema =
        jsonschema::validator_for(&serde_json::to_value(schema_for!(ParseOutcome)).unwrap())
            .unwrap();

    let examples = [json!({
        "func": "None",
        "scale": 1000.0,
        "vector": [-1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]
    })];

    examples
        .iter()
        .for_each(|example| schema.validate(example).expect("schema validation failed"));
}

#[cfg(feature = "schemars")]
#[test]
fn unit_error_schema() {
    use fits_units::UnitError;
    use schemars::schema_for;
    use serde_json::json;

    let schema =
        jsonschema::validator_for(&serde_json::to_value(schema_for!(UnitError)).unwrap()).unwrap();

    let example = json!({"kind": "UnbalParen", "input": "("});
    schema.validate(&example).expect("schema validation failed");
}
