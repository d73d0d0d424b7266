use sovran_vocab::{make_optional, Optional, VocabError};

#[derive(Debug, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

fn my_sqrt(value: f64) -> Optional<f64> {
    if value < 0.0 {
        return Optional::none();
    }
    Optional::some(value.sqrt())
}

fn could_create_point(create: bool) -> Optional<Point> {
    if create {
        return Optional::in_place((42, 24));
    }
    Optional::none()
}

fn main() -> Result<(), VocabError> {
    for input in [-1.0, 9.0, 2.0] {
        let root = my_sqrt(input);
        println!("sqrt({}) -> {:?}, or default {}", input, root, root.get_value_or(-1.0));
    }

    let point = could_create_point(true);
    let p = point.get_value()?;
    println!("Created point {}x{}", p.x, p.y);

    let mut other = make_optional::<Point, _>((42, 24));
    println!("Points equal: {}", other == point);

    other.clear();
    match other.get_value() {
        Ok(p) => println!("Still holds {:?}", p),
        Err(e) => println!("Error: {}", e),
    }

    if could_create_point(false).is_empty() {
        println!("No point requested, none created");
    }

    Ok(())
}
