//! Build a small 3-D index and print the identifiers of the two points
//! nearest to a query.

use kdknn::prelude::*;

fn main() -> Result<(), KnnError> {
    let points = vec![
        Point::new([1.0, 2.0, 3.0], 0),
        Point::new([4.0, 5.0, 6.0], 1),
        Point::new([7.0, 8.0, 9.0], 2),
        Point::new([2.0, 3.0, 1.0], 3),
        Point::new([5.0, 6.0, 4.0], 4),
        Point::new([8.0, 9.0, 7.0], 5),
    ];

    let tree = KnnBuilder::new().build(points)?;

    let query = Point::new([3.0, 4.0, 5.0], -1);
    let k = 2;
    let nearest = tree.search(&query, k)?;

    let ids: Vec<String> = nearest.ids().map(|id| id.to_string()).collect();
    println!(
        "The IDs of the {} nearest neighbors of the query point are: {}",
        k,
        ids.join(" ")
    );

    for n in &nearest {
        println!("  #{} at distance {:.4}", n.point.id(), n.distance);
    }

    Ok(())
}
