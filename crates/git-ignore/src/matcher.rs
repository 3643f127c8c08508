//! Segment/element matching of a single [`CompiledPattern`] against a path
//! already split into components.

use crate::element::Element;
use crate::segment::{CompiledPattern, Segment};

fn byte_eq(a: u8, b: u8, ignore_case: bool) -> bool {
    if ignore_case {
        a.eq_ignore_ascii_case(&b)
    } else {
        a == b
    }
}

fn bytes_eq(a: &[u8], b: &[u8], ignore_case: bool) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| byte_eq(x, y, ignore_case))
}

/// Whether a single element sequence matches an entire path component.
fn elements_match(elements: &[Element], text: &[u8], ignore_case: bool) -> bool {
    element_at(elements, 0, text, 0, ignore_case)
}

fn element_at(elements: &[Element], ei: usize, text: &[u8], ti: usize, ignore_case: bool) -> bool {
    if ei == elements.len() {
        return ti == text.len();
    }

    match &elements[ei] {
        Element::Literal(lit) => {
            let lit = lit.as_bytes();
            let end = ti.checked_add(lit.len());
            match end {
                Some(end) if end <= text.len() && bytes_eq(&text[ti..end], lit, ignore_case) => {
                    element_at(elements, ei + 1, text, end, ignore_case)
                }
                _ => false,
            }
        }
        Element::SingleChar => {
            if ti < text.len() && text[ti] != b'/' {
                element_at(elements, ei + 1, text, ti + 1, ignore_case)
            } else {
                false
            }
        }
        Element::Star => {
            let mut k = ti;
            loop {
                if element_at(elements, ei + 1, text, k, ignore_case) {
                    return true;
                }
                if k >= text.len() || text[k] == b'/' {
                    return false;
                }
                k += 1;
            }
        }
        Element::CharClassRef(class) => {
            if ti >= text.len() || text[ti] == b'/' {
                return false;
            }
            let b = text[ti];
            let hit = if ignore_case {
                let lo = b.to_ascii_lowercase();
                let up = b.to_ascii_uppercase();
                if class.negated() {
                    !class.contains(lo) && !class.contains(up)
                } else {
                    class.contains(lo) || class.contains(up)
                }
            } else {
                class.matches_exact(b)
            };
            hit && element_at(elements, ei + 1, text, ti + 1, ignore_case)
        }
    }
}

/// Recursive segment/component walk. `i` indexes into `segments`, `j` into
/// `components`.
fn segment_match(segments: &[Segment], i: usize, components: &[&[u8]], j: usize, ignore_case: bool) -> bool {
    if i == segments.len() {
        return j == components.len();
    }

    if j == components.len() {
        let remaining = &segments[i..];
        if !remaining.iter().all(Segment::is_globstar) {
            return false;
        }
        // A single trailing globstar ("abc/**") needs at least one more
        // component; it cannot close out the match on its own.
        return remaining.len() != 1;
    }

    match &segments[i] {
        Segment::Globstar => {
            let trailing = i == segments.len() - 1;
            if !trailing && segment_match(segments, i + 1, components, j, ignore_case) {
                return true;
            }
            if trailing {
                return true;
            }
            segment_match(segments, i, components, j + 1, ignore_case)
        }
        Segment::Normal(elements) => {
            elements_match(elements, components[j], ignore_case)
                && segment_match(segments, i + 1, components, j + 1, ignore_case)
        }
    }
}

/// Whether `pattern` matches a path already split into non-empty components.
pub fn pattern_matches(
    pattern: &CompiledPattern,
    components: &[&[u8]],
    is_dir: bool,
    ignore_case: bool,
) -> bool {
    if pattern.flags.dir_only && !is_dir {
        return false;
    }

    if pattern.flags.anchored {
        segment_match(&pattern.segments, 0, components, 0, ignore_case)
    } else {
        (0..=components.len()).any(|j| segment_match(&pattern.segments, 0, components, j, ignore_case))
    }
}
