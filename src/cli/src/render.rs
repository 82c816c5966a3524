use itertools::{Itertools, izip};
use owo_colors::OwoColorize;
use rubik_core::{Color, Cube, FaceId, Tile};

fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::White => (255, 255, 255),
        Color::Yellow => (255, 255, 0),
        Color::Green => (0, 255, 0),
        Color::Blue => (0, 0, 255),
        Color::Red => (255, 0, 0),
        Color::Orange => (255, 128, 0),
    }
}

fn tile(color: Color) -> String {
    let (r, g, b) = rgb(color);
    "  ".on_truecolor(r, g, b).to_string()
}

fn blocks(row: &[Tile]) -> String {
    row.iter().map(|t| tile(Tile::color(*t))).join("")
}

/// Draw the unfolded net with colored blocks, two columns per tile.
pub fn colored_net(cube: &Cube) -> String {
    let pad = " ".repeat(2 * cube.size() + 1);
    let rows = |face: FaceId| cube.face(face).rows().map(blocks);
    let mut out = String::new();

    for top in rows(FaceId::Top) {
        out += &format!("{pad}{top}\n");
    }
    for (left, front, right, back) in izip!(
        rows(FaceId::Left),
        rows(FaceId::Front),
        rows(FaceId::Right),
        rows(FaceId::Back)
    ) {
        out += &format!("{left} {front} {right} {back}\n");
    }
    for bottom in rows(FaceId::Bottom) {
        out += &format!("{pad}{bottom}\n");
    }

    out
}
