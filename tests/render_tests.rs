use mouthbreather::render::{cell_width, glyph_at};
use mouthbreather::{render, Coordinates, GameStatus, Glyph, Grid, RowOrder};

fn c(x: usize, y: usize) -> Coordinates {
    Coordinates::new(x, y)
}

#[test]
fn test_cell_width_fits_labels_and_symbols() {
    assert_eq!(cell_width(5, 5), 2);
    assert_eq!(cell_width(100, 5), 3);
    assert_eq!(cell_width(5, 100), 2);
    assert_eq!(cell_width(511, 511), 3);
    assert_eq!(cell_width(9, 800), 3);
}

#[test]
fn test_fresh_grid_renders_covered() {
    let grid = Grid::new(5, 5).unwrap();
    let expected = "\
  | 1| 2| 3| 4| 5|
 A| .| .| .| .| .|
 B| .| .| .| .| .|
 C| .| .| .| .| .|
 D| .| .| .| .| .|
 E| .| .| .| .| .|
";
    assert_eq!(render(&grid, RowOrder::Standard), expected);
}

#[test]
fn test_glyphs_follow_cell_state() {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.place_mines(&[c(1, 1), c(5, 5)]).unwrap();
    assert_eq!(glyph_at(&grid, c(2, 2)), Some(Glyph::Unknown));
    grid.flag(c(2, 2));
    assert_eq!(glyph_at(&grid, c(2, 2)), Some(Glyph::Flag));
    grid.reveal(c(2, 2));
    assert_eq!(glyph_at(&grid, c(2, 2)), Some(Glyph::Count(1)));
    grid.reveal(c(3, 1));
    assert_eq!(glyph_at(&grid, c(3, 1)), Some(Glyph::Blank));
    grid.reveal(c(1, 1));
    assert_eq!(glyph_at(&grid, c(1, 1)), Some(Glyph::Mine));
    assert_eq!(glyph_at(&grid, c(0, 1)), None);
}

#[test]
fn test_glyphs_are_centered() {
    assert_eq!(format!("{:^3}", Glyph::Mine), ":O ");
    assert_eq!(format!("{:^3}", Glyph::Count(4)), " 4 ");
    assert_eq!(format!("{:^3}", Glyph::Blank), "   ");
    assert_eq!(format!("{:^3}", Glyph::Flag), " + ");
    assert_eq!(format!("{}", Glyph::Unknown), ".");
}

#[test]
fn test_row_order() {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.place_mines(&[c(1, 1)]).unwrap();
    grid.reveal(c(1, 1));

    let standard = render(&grid, RowOrder::Standard);
    let lines: Vec<_> = standard.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[1], " A| .| .| .| .| .|");
    assert_eq!(lines[5], " E|:O| .| .| .| .|");

    let inverted = render(&grid, RowOrder::Inverted);
    let lines: Vec<_> = inverted.lines().collect();
    assert_eq!(lines[0], "  | 1| 2| 3| 4| 5|");
    assert_eq!(lines[1], " E|:O| .| .| .| .|");
    assert_eq!(lines[5], " A| .| .| .| .| .|");
}

#[test]
fn test_odd_padding_goes_left() {
    let grid = Grid::new(100, 5).unwrap();
    let rendered = render(&grid, RowOrder::Standard);
    let header = rendered.lines().next().unwrap();
    assert!(header.starts_with("   | 1 | 2 |"));
    assert!(header.ends_with(" 99|100|"));
    let top = rendered.lines().nth(1).unwrap();
    assert!(top.starts_with(" A | . | . |"));
}

#[test]
fn test_lost_grid_shows_every_mine_without_revealing_it() {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.place_mines(&[c(1, 1), c(5, 5), c(3, 4)]).unwrap();
    grid.flag(c(5, 5));
    assert_eq!(glyph_at(&grid, c(5, 5)), Some(Glyph::Flag));
    assert_eq!(glyph_at(&grid, c(3, 4)), Some(Glyph::Unknown));

    grid.reveal(c(1, 1));
    assert_eq!(grid.status(), GameStatus::Lost);
    for at in [c(1, 1), c(5, 5), c(3, 4)] {
        assert_eq!(glyph_at(&grid, at), Some(Glyph::Mine));
    }
    assert_eq!(glyph_at(&grid, c(2, 2)), Some(Glyph::Unknown));
    assert!(!grid.cell(c(5, 5)).unwrap().is_revealed());
    assert!(!grid.cell(c(3, 4)).unwrap().is_revealed());
    assert_eq!(grid.revealed_count(), 1);

    let lines: Vec<_> = render(&grid, RowOrder::Standard).lines().map(String::from).collect();
    assert_eq!(lines[1], " A| .| .| .| .|:O|");
    assert_eq!(lines[2], " B| .| .|:O| .| .|");
    assert_eq!(lines[5], " E|:O| .| .| .| .|");
}
