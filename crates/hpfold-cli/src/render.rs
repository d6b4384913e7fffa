use hpfold::core::models::lattice::LatticePoint;
use hpfold::core::models::monomer::HpSequence;
use itertools::Itertools;

const HYDROPHOBIC_FILL: &str = "orange";
const POLAR_FILL: &str = "skyblue";
const BOND_STROKE: &str = "gray";

const CELL_PX: i32 = 40;
const NODE_RADIUS: i32 = 10;
const MARGIN_PX: i32 = 30;

/// Draws the fold as a character grid, one cell per lattice site with bond
/// characters in between. Rows read top-down with +y upward.
pub fn ascii_lattice(sequence: &HpSequence, walk: &[LatticePoint]) -> String {
    if walk.is_empty() {
        return String::new();
    }
    let (min_x, max_x) = walk.iter().map(|p| p.x).minmax().into_option().unwrap();
    let (min_y, max_y) = walk.iter().map(|p| p.y).minmax().into_option().unwrap();
    let width = (max_x - min_x) as usize * 2 + 1;
    let height = (max_y - min_y) as usize * 2 + 1;
    let mut grid = vec![vec![' '; width]; height];

    let cell = |p: &LatticePoint| -> (usize, usize) {
        let row = ((max_y - p.y) * 2) as usize;
        let col = ((p.x - min_x) * 2) as usize;
        (row, col)
    };

    for (point, monomer) in walk.iter().zip(sequence.monomers()) {
        let (row, col) = cell(point);
        grid[row][col] = monomer.symbol();
    }
    for (a, b) in walk.iter().tuple_windows() {
        let (row_a, col_a) = cell(a);
        let (row_b, col_b) = cell(b);
        let bond = if row_a == row_b { '─' } else { '│' };
        grid[(row_a + row_b) / 2][(col_a + col_b) / 2] = bond;
    }

    grid.into_iter()
        .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
        .join("\n")
}

/// Draws the fold as an SVG document: bonds as gray segments under the
/// chain, monomers as circles colored by type, residue indices as labels.
pub fn svg_lattice(sequence: &HpSequence, walk: &[LatticePoint]) -> String {
    if walk.is_empty() {
        return String::new();
    }
    let (min_x, max_x) = walk.iter().map(|p| p.x).minmax().into_option().unwrap();
    let (min_y, max_y) = walk.iter().map(|p| p.y).minmax().into_option().unwrap();
    let width = 2 * MARGIN_PX + (max_x - min_x) * CELL_PX;
    let height = 2 * MARGIN_PX + (max_y - min_y) * CELL_PX;

    let pixel = |p: &LatticePoint| -> (i32, i32) {
        let x = MARGIN_PX + (p.x - min_x) * CELL_PX;
        let y = MARGIN_PX + (max_y - p.y) * CELL_PX;
        (x, y)
    };

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    ));

    for (a, b) in walk.iter().tuple_windows() {
        let (x1, y1) = pixel(a);
        let (x2, y2) = pixel(b);
        svg.push_str(&format!(
            "  <line x1=\"{x1}\" y1=\"{y1}\" x2=\"{x2}\" y2=\"{y2}\" \
             stroke=\"{BOND_STROKE}\" stroke-width=\"3\"/>\n"
        ));
    }

    for (index, (point, monomer)) in walk.iter().zip(sequence.monomers()).enumerate() {
        let (x, y) = pixel(point);
        let fill = if monomer.is_hydrophobic() {
            HYDROPHOBIC_FILL
        } else {
            POLAR_FILL
        };
        svg.push_str(&format!(
            "  <circle cx=\"{x}\" cy=\"{y}\" r=\"{NODE_RADIUS}\" fill=\"{fill}\" \
             stroke=\"black\"/>\n"
        ));
        let label_y = y - NODE_RADIUS - 4;
        svg.push_str(&format!(
            "  <text x=\"{x}\" y=\"{label_y}\" font-size=\"10\" \
             text-anchor=\"middle\">{index}</text>\n"
        ));
    }

    svg.push_str("</svg>\n");
    svg
}
