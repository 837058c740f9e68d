use crate::reader::Opening;

/// Render one opening as one element of the implied outer array:
///
/// `{ code: "B01", name: "Scandinavian Defense", moves: ["e4", "d5"] },`
///
/// Quotes and backslashes inside the fields are emitted verbatim, so a
/// field containing either produces a structurally invalid entry. The
/// catalogue does not contain them.
pub fn record_literal(opening: &Opening) -> String {
    let moves = opening
        .moves
        .iter()
        .map(|token| format!("\"{}\"", token))
        .collect::<Vec<String>>()
        .join(", ");

    format!(
        "{{ code: \"{}\", name: \"{}\", moves: [{}] }},",
        opening.code, opening.name, moves
    )
}
