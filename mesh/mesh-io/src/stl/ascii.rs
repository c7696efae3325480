//! ASCII STL reader.

use mesh_types::{Triangle, TriangleSink, Vertex};
use tracing::{debug, trace};

use crate::error::{IoError, IoResult};

/// Decode an ASCII STL buffer into `sink`.
///
/// The buffer is decoded as UTF-8, replacing invalid sequences. Lines are
/// split on whitespace, so indentation, repeated spaces, tabs and `\r\n`
/// endings are all accepted. Keywords are case-sensitive.
///
/// Only `facet normal`, `vertex` and `endfacet` lines matter; everything
/// else (`solid`, `outer loop`, `endloop`, `endsolid`, blank lines, unknown
/// keywords) is skipped. A facet that closes with other than exactly three
/// vertices is dropped, as is a facet still open at end of input.
///
/// Returns the number of triangles emitted.
///
/// # Errors
///
/// Returns [`IoError::MalformedText`] if a `vertex` line inside a facet
/// does not carry three finite numbers.
///
/// # Example
///
/// ```
/// use mesh_io::read_stl_ascii;
/// use mesh_types::Triangle;
///
/// let text = b"solid t
/// facet normal 0 0 1
///   outer loop
///     vertex 0 0 0
///     vertex 1 0 0
///     vertex 0 1 0
///   endloop
/// endfacet
/// endsolid t";
///
/// let mut triangles: Vec<Triangle> = Vec::new();
/// assert_eq!(read_stl_ascii(text, &mut triangles).unwrap(), 1);
/// ```
pub fn read_stl_ascii<S: TriangleSink>(bytes: &[u8], mut sink: S) -> IoResult<usize> {
    let text = String::from_utf8_lossy(bytes);
    let mut parser = FacetParser::default();
    let mut emitted = 0;

    for (index, line) in text.lines().enumerate() {
        if let Some(triangle) = parser.feed_line(index + 1, line)? {
            sink.push_triangle(triangle);
            emitted += 1;
        }
    }

    if let State::InFacet = parser.state {
        trace!(
            vertices = parser.vertices.len(),
            "Discarding facet left open at end of input"
        );
    }

    debug!(
        triangles = emitted,
        discarded = parser.discarded,
        "Decoded ASCII STL"
    );
    Ok(emitted)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum State {
    #[default]
    Idle,
    InFacet,
}

/// Line-at-a-time facet state machine.
#[derive(Debug, Default)]
struct FacetParser {
    state: State,
    vertices: Vec<Vertex>,
    discarded: usize,
}

impl FacetParser {
    /// Consume one line, returning a triangle when a facet closes cleanly.
    fn feed_line(&mut self, line_number: usize, line: &str) -> IoResult<Option<Triangle>> {
        let mut tokens = line.split_whitespace();

        match (tokens.next(), self.state) {
            (Some("facet"), _) if tokens.next() == Some("normal") => {
                self.vertices.clear();
                self.state = State::InFacet;
            }
            (Some("vertex"), State::InFacet) => {
                let vertex = parse_vertex(tokens).map_err(|reason| IoError::MalformedText {
                    line: line_number,
                    content: line.trim().to_string(),
                    reason,
                })?;
                self.vertices.push(vertex);
            }
            (Some("endfacet"), State::InFacet) => {
                self.state = State::Idle;
                if let &[a, b, c] = self.vertices.as_slice() {
                    return Ok(Some(Triangle::from_vertices([a, b, c])));
                }
                trace!(
                    line = line_number,
                    vertices = self.vertices.len(),
                    "Discarding facet without exactly three vertices"
                );
                self.discarded += 1;
            }
            _ => {}
        }

        Ok(None)
    }
}

/// Parse the three coordinates following a `vertex` keyword.
///
/// Tokens after the third coordinate are ignored.
fn parse_vertex<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<Vertex, &'static str> {
    let mut coords = [0.0_f64; 3];
    for coord in &mut coords {
        let token = tokens.next().ok_or("expected three coordinates")?;
        *coord = token
            .parse()
            .map_err(|_| "coordinate is not a number")?;
        if !coord.is_finite() {
            return Err("coordinate is not finite");
        }
    }
    Ok(Vertex::from(coords))
}
