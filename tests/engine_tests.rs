use bsmotion::editor::buffer::TextBuffer;
use bsmotion::editor::port::{LineWidths, PortResult, Position};
use bsmotion::jump::engine::NavigationEngine;
use bsmotion::jump::{Direction, Region};

/// Every line has the same width.
struct Uniform(usize);

impl LineWidths for Uniform {
    fn line_width(&self, _line: usize) -> PortResult<usize> {
        Ok(self.0)
    }
}

fn region(top: usize, bottom: usize, left: usize, right: usize, at: (usize, usize)) -> Region {
    Region::new(top, bottom, left, right, Position::new(at.0, at.1))
}

/// 20 lines of 40 columns, except line 12 which is 10 wide and line 15
/// which is empty.
fn ragged_buffer() -> TextBuffer {
    let text: String = (1..=20)
        .map(|line| match line {
            12 => "x".repeat(10),
            15 => String::new(),
            _ => "x".repeat(40),
        })
        .map(|line| line + "\n")
        .collect();
    TextBuffer::from_text(&text)
}

const ALL: [Direction; 4] = [
    Direction::Left,
    Direction::Down,
    Direction::Up,
    Direction::Right,
];

#[test]
fn test_up_from_line_five_of_ten() {
    let engine = NavigationEngine::default();
    let step = engine
        .advance(&region(1, 10, 1, 80, (5, 1)), Direction::Up, &Uniform(80))
        .unwrap();

    assert_eq!(step.region.current_line, 3);
    assert_eq!(step.region.bottom_line, 5);
    assert_eq!(step.region.top_line, 1);
    assert!(!step.converged);
}

#[test]
fn test_down_moves_top_to_old_current() {
    let engine = NavigationEngine::default();
    let step = engine
        .advance(&region(1, 10, 1, 80, (5, 1)), Direction::Down, &Uniform(80))
        .unwrap();

    assert_eq!(step.region.top_line, 5);
    assert_eq!(step.region.current_line, 7);
    assert_eq!(step.region.bottom_line, 10);
}

#[test]
fn test_horizontal_moves_mirror_vertical() {
    let engine = NavigationEngine::default();
    let start = region(1, 10, 1, 80, (5, 40));

    let left = engine.advance(&start, Direction::Left, &Uniform(80)).unwrap();
    assert_eq!(
        (left.region.left_col, left.region.current_col, left.region.right_col),
        (1, 20, 40)
    );

    let right = engine.advance(&start, Direction::Right, &Uniform(80)).unwrap();
    assert_eq!(
        (right.region.left_col, right.region.current_col, right.region.right_col),
        (40, 60, 80)
    );
    assert_eq!(right.region.current_line, 5);
}

#[test]
fn test_column_pulled_back_to_short_line() {
    let buffer = ragged_buffer();
    let engine = NavigationEngine::default();
    // down from line 5 lands on (20 + 5) / 2 = 12, which is 10 wide
    let step = engine
        .advance(&region(1, 20, 1, 40, (5, 30)), Direction::Down, &buffer)
        .unwrap();

    assert_eq!(step.region.current_line, 12);
    assert_eq!(step.region.current_col, 10);
    assert_eq!(step.region.right_col, 40);
}

#[test]
fn test_line_width_clamp_stops_at_left_col() {
    let buffer = ragged_buffer();
    let engine = NavigationEngine::default();
    let step = engine
        .advance(&region(1, 20, 20, 40, (5, 30)), Direction::Down, &buffer)
        .unwrap();

    assert_eq!(step.region.current_line, 12);
    assert_eq!(step.region.current_col, 20);
    assert!(step.region.is_valid());
}

#[test]
fn test_empty_line_bounds_column_at_one() {
    let buffer = ragged_buffer();
    let engine = NavigationEngine::default();
    // up from line 20 within 10..=20 lands on 15, which is empty
    let step = engine
        .advance(&region(10, 20, 1, 40, (20, 25)), Direction::Up, &buffer)
        .unwrap();

    assert_eq!(step.region.current_line, 15);
    assert_eq!(step.region.current_col, 1);
}

#[test]
fn test_line_width_clamp_can_be_disabled() {
    let buffer = ragged_buffer();
    let engine = NavigationEngine::new(false);
    let step = engine
        .advance(&region(1, 20, 1, 40, (5, 30)), Direction::Down, &buffer)
        .unwrap();

    assert_eq!(step.region.current_col, 30);
    assert!(!engine.clamps_to_line_width());
}

#[test]
fn test_converges_when_line_span_reaches_one() {
    let engine = NavigationEngine::default();
    let step = engine
        .advance(&region(4, 6, 1, 80, (5, 10)), Direction::Down, &Uniform(80))
        .unwrap();

    assert_eq!(step.region.line_span(), 1);
    assert!(step.converged);
}

#[test]
fn test_converges_when_col_span_reaches_one() {
    let engine = NavigationEngine::default();
    let step = engine
        .advance(&region(1, 50, 10, 12, (20, 11)), Direction::Left, &Uniform(80))
        .unwrap();

    assert_eq!(step.region.col_span(), 1);
    assert!(step.converged);
}

#[test]
fn test_moved_axis_never_grows() {
    let engine = NavigationEngine::new(false);
    for top in 1..6 {
        for bottom in top..top + 12 {
            for current in top..=bottom {
                let start = region(top, bottom, 3, 17, (current, 9));
                for direction in ALL {
                    let next = engine
                        .advance(&start, direction, &Uniform(100))
                        .unwrap()
                        .region;

                    assert!(next.is_valid(), "{} -> {}", start, next);
                    assert!(next.line_span() <= start.line_span());
                    assert!(next.col_span() <= start.col_span());

                    match direction {
                        Direction::Up => {
                            assert_eq!(next.bottom_line, current);
                            assert!(start.top_line <= next.current_line);
                            assert!(next.current_line <= current);
                        }
                        Direction::Down => {
                            assert_eq!(next.top_line, current);
                            assert!(current <= next.current_line);
                            assert!(next.current_line <= start.bottom_line);
                        }
                        Direction::Left | Direction::Right => {
                            assert_eq!(next.top_line, start.top_line);
                            assert_eq!(next.bottom_line, start.bottom_line);
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn test_converges_within_log2_moves() {
    let engine = NavigationEngine::new(false);
    for span in 2usize..=300 {
        let bound = (usize::BITS - (span - 1).leading_zeros()) as usize;
        for pattern in 0u32..8 {
            let top = 1;
            let bottom = span + 1;
            let mut current = region(top, bottom, 1, 1000, ((top + bottom) / 2, 500));
            let mut moves = 0;
            loop {
                let direction = if pattern >> (moves % 3) & 1 == 1 {
                    Direction::Up
                } else {
                    Direction::Down
                };
                let step = engine.advance(&current, direction, &Uniform(1000)).unwrap();
                current = step.region;
                moves += 1;
                if step.converged {
                    break;
                }
                assert!(moves <= bound, "span {} took more than {} moves", span, bound);
            }
            assert!(moves <= bound, "span {} took {} moves", span, moves);
        }
    }
}
