//! Row building and batch inflation

use crate::color::random_color;
use crate::template::RowTemplate;
use crate::view::{Cell, Container, LayoutParams, Row};
use rand::Rng;

/// Number of rows built per inflate action
pub const MAX_VIEWS: usize = 10_000;

/// Build one row: every template cell gets its own random color and the label
/// is the decimal index.
pub fn build_row<R: Rng + ?Sized>(template: &RowTemplate, index: usize, rng: &mut R) -> Row {
    let cells = template
        .cells()
        .iter()
        .map(|spec| Cell {
            color: random_color(rng),
            weight: spec.weight,
        })
        .collect();
    Row::new(index, cells, index.to_string(), template.label_cell())
}

/// Build a fully populated vertical container of `count` rows, in index order.
///
/// Runs to completion without yielding; call it from a worker thread.
pub fn inflate_batch<R: Rng + ?Sized>(
    count: usize,
    layout: LayoutParams,
    template: &RowTemplate,
    rng: &mut R,
) -> Container {
    profiling::scope!("inflate_batch");

    let start = std::time::Instant::now();
    let mut container = Container::vertical(layout);
    container.reserve(count);
    for i in 0..count {
        container.push(build_row(template, i, rng));
    }

    tracing::debug!(
        "Inflated {} rows ({} cells each) in {:.1} ms",
        count,
        template.cells().len(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    container
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::CellSpec;
    use crate::view::Dimension;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_build_row_labels_and_cells() {
        let template =
            RowTemplate::new(vec![CellSpec::new(1.0), CellSpec::new(2.0)], 1).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let row = build_row(&template, 42, &mut rng);

        assert_eq!(row.index(), 42);
        assert_eq!(row.label(), "42");
        assert_eq!(row.label_cell(), 1);
        assert_eq!(row.cells().len(), 2);
        assert_eq!(row.cells()[1].weight, 2.0);
    }

    #[test]
    fn test_rows_get_independent_colors() {
        let template = RowTemplate::default();
        let mut rng = StdRng::seed_from_u64(9);
        let rows: Vec<Row> = (0..100).map(|i| build_row(&template, i, &mut rng)).collect();
        let distinct: std::collections::HashSet<_> = rows
            .iter()
            .flat_map(|r| r.cells().iter().map(|c| c.color))
            .collect();
        assert!(distinct.len() > 250);
    }

    #[test]
    fn test_inflate_batch_full_count_in_order() {
        let mut rng = StdRng::seed_from_u64(0);
        let container = inflate_batch(
            MAX_VIEWS,
            LayoutParams::default(),
            &RowTemplate::default(),
            &mut rng,
        );

        assert_eq!(container.len(), MAX_VIEWS);
        for (i, row) in container.rows().iter().enumerate() {
            assert_eq!(row.index(), i);
            assert_eq!(row.label(), i.to_string());
        }
        assert_eq!(container.rows().last().map(Row::label), Some("9999"));
    }

    #[test]
    fn test_inflate_batch_copies_layout() {
        let layout = LayoutParams {
            width: Dimension::Exact(320.0),
            height: Dimension::WrapContent,
            margin: 4.0,
        };
        let mut rng = StdRng::seed_from_u64(0);
        let container = inflate_batch(3, layout.clone(), &RowTemplate::default(), &mut rng);

        assert_eq!(container.layout(), &layout);
        assert_eq!(container.len(), 3);
    }

    #[test]
    fn test_inflate_zero_rows() {
        let mut rng = StdRng::seed_from_u64(0);
        let container = inflate_batch(0, LayoutParams::default(), &RowTemplate::default(), &mut rng);
        assert!(container.is_empty());
    }
}
