use sovran_vocab::{any_cast, any_cast_ref, make_any, AnyValue, BadAnyCast, TypeInfo};

#[derive(Debug, Clone, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

fn describe(value: &AnyValue) -> String {
    if let Some(n) = any_cast_ref::<i32>(Some(value)) {
        format!("int {}", n)
    } else if let Some(f) = any_cast_ref::<f64>(Some(value)) {
        format!("double {}", f)
    } else if let Some(s) = any_cast_ref::<String>(Some(value)) {
        format!("string {:?}", s)
    } else if let Some(p) = any_cast_ref::<Point>(Some(value)) {
        format!("point {}x{}", p.x, p.y)
    } else if value.has_value() {
        format!("something else ({})", value.type_info())
    } else {
        "nothing".to_string()
    }
}

fn main() -> Result<(), BadAnyCast> {
    let mut values = vec![
        AnyValue::new(42i32),
        AnyValue::new(2.5f64),
        AnyValue::new(String::from("The cake is a lie!")),
        AnyValue::in_place::<Point, _>((42, 24)),
        AnyValue::new(true),
        AnyValue::empty(),
    ];

    for value in &values {
        println!("{}", describe(value));
    }

    // The checked path reports what went wrong
    match any_cast::<bool>(&values[2]) {
        Ok(flag) => println!("Unexpected flag: {}", flag),
        Err(e) => println!("Error: {}", e),
    }

    // Values can change type in place
    values[0].set(String::from("no longer an int"));
    println!("First value now holds {}", values[0].type_info());
    assert_eq!(values[0].type_info(), TypeInfo::of::<String>());

    let mut cleared = make_any::<Point, _>((42, 42));
    println!("Point before clear: {:?}", any_cast::<Point>(&cleared)?);
    cleared.clear();
    if let Err(e) = any_cast::<Point>(&cleared) {
        println!("After clear: {}", e);
    }

    Ok(())
}
