pub const GAME_OVER_BANNER: &[&str] = &["GAME OVER"];

/// Positions of the non-space characters of `lines`, centered on a
/// `width x height` field. Positions may fall outside the field when
/// the text is larger than the field.
pub(super) fn layout<'a>(
    lines: &'a [&'a str],
    width: usize,
    height: usize,
) -> impl Iterator<Item = (i64, i64)> + 'a {
    let text_width = lines.first().map_or(0, |line| line.chars().count());
    // floor division: an odd overflow on a too small field puts the extra cell on the left/top
    let start_x = (width as i64 - text_width as i64).div_euclid(2);
    let start_y = (height as i64 - lines.len() as i64).div_euclid(2);

    lines.iter().enumerate().flat_map(move |(row, line)| {
        line.chars()
            .enumerate()
            .filter(|&(_, c)| c != ' ')
            .map(move |(col, _)| (start_x + col as i64, start_y + row as i64))
    })
}
