use simple_math::config::MathConfig;
use simple_math::text::{FormatRule, ParseRule};
use simple_math::{algebra, Matrix};

fn main() {
    env_logger::init();

    let config = MathConfig::default();
    let fill = config.fill.range_fill();

    let top = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
        .expect("failed to build top block");
    let bottom: Matrix<f64> = algebra::from_text("[[5, 6]]", &ParseRule::default())
        .expect("failed to parse bottom block");

    let stacked = algebra::stack_vertically_with(&top, &bottom, &fill)
        .expect("column counts should match");
    println!("stacked {:?}:\n{}", stacked.shape(), stacked.to_string_with(&FormatRule::tsv()));

    let column = Matrix::from_rows(vec![vec![0.5], vec![0.25], vec![0.125]])
        .expect("failed to build column");
    let joined = algebra::join_horizontally_with(&stacked, &column, &fill)
        .expect("row counts should match");
    println!("joined {:?}: {}", joined.shape(), joined);

    // A duplicate shares storage; a deep copy does not.
    let alias = joined.duplicate();
    let snapshot = joined.deep_copy();
    alias.set(0, 0, -1.0).expect("index in range");
    println!(
        "after write through alias: original {}, snapshot {}",
        joined.get(0, 0).expect("index in range"),
        snapshot.get(0, 0).expect("index in range")
    );

    match algebra::stack_vertically(&joined, &column) {
        Ok(_) => println!("unexpected success"),
        Err(e) => println!("mismatch reported: {}", e),
    }

    let labels = Matrix::from_slice(&["alpha".to_string(), "b, c".to_string(), String::new()]);
    println!("labels: {} (numeric: {})", labels, labels.is_numeric());
}
