/// Ancho por defecto de la ventana de páginas
pub const DEFAULT_WINDOW_SIZE: u32 = 5;

/// Números de página a mostrar como botones.
///
/// Ventana deslizante centrada en `current`, pegada a los extremos cerca del
/// principio y del final. Siempre dentro de `[1, page_count]` y de longitud
/// `min(window_size, page_count)`.
pub fn compute_window(current: u32, page_count: u32, window_size: u32) -> Vec<u32> {
    if page_count == 0 || window_size == 0 {
        return Vec::new();
    }

    let width = window_size.min(page_count);
    let half = window_size / 2;

    let start = if page_count <= window_size || current <= half + 1 {
        1
    } else if current >= page_count - half {
        page_count - window_size + 1
    } else {
        current - half
    };

    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(from: u32, to: u32) -> Vec<u32> {
        (from..=to).collect()
    }

    #[test]
    fn small_collections_show_every_page() {
        for page_count in 1..=5 {
            for current in 0..=page_count + 1 {
                assert_eq!(
                    compute_window(current, page_count, DEFAULT_WINDOW_SIZE),
                    range(1, page_count),
                    "current={} page_count={}",
                    current,
                    page_count
                );
            }
        }
    }

    #[test]
    fn near_the_start_shows_first_five() {
        for page_count in 6..=30 {
            for current in 1..=3 {
                assert_eq!(compute_window(current, page_count, 5), range(1, 5));
            }
        }
    }

    #[test]
    fn near_the_end_shows_last_five() {
        for page_count in 6..=30 {
            for current in page_count - 2..=page_count {
                assert_eq!(
                    compute_window(current, page_count, 5),
                    range(page_count - 4, page_count)
                );
            }
        }
    }

    #[test]
    fn middle_pages_are_centered() {
        for page_count in 6..=30 {
            for current in 4..page_count - 2 {
                let window = compute_window(current, page_count, 5);
                assert_eq!(window, range(current - 2, current + 2));
                assert_eq!(window.len(), 5);
            }
        }
    }

    #[test]
    fn known_scenarios() {
        assert_eq!(compute_window(7, 20, 5), vec![5, 6, 7, 8, 9]);
        assert_eq!(compute_window(2, 3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn out_of_range_current_is_clamped() {
        assert_eq!(compute_window(0, 10, 5), range(1, 5));
        assert_eq!(compute_window(99, 10, 5), range(6, 10));
        assert!(compute_window(1, 0, 5).is_empty());
    }

    #[test]
    fn other_window_sizes_stay_in_bounds() {
        for window_size in 1..=8 {
            for page_count in 1..=20 {
                for current in 1..=page_count {
                    let window = compute_window(current, page_count, window_size);
                    assert_eq!(window.len() as u32, window_size.min(page_count));
                    assert!(window.iter().all(|p| (1..=page_count).contains(p)));
                    assert!(window.contains(&current));
                }
            }
        }
    }
}
