use tessera_scales::color::parse_css_color;
use tessera_scales::ScaleError;

/// Fill colors for hoverable elements: every element is drawn with the base
/// color except the hovered one, which gets its own active color
#[derive(Debug, Clone, PartialEq)]
pub struct HoverStyle {
    pub base: [f32; 4],
    pub active: Vec<[f32; 4]>,
}

impl HoverStyle {
    /// Active colors are assigned to elements by index, cycling when there
    /// are more elements than colors
    pub fn try_new(base: &str, active: &[&str]) -> Result<Self, ScaleError> {
        if active.is_empty() {
            return Err(ScaleError::EmptyRange);
        }
        Ok(Self {
            base: parse_css_color(base)?,
            active: active
                .iter()
                .map(|c| parse_css_color(c))
                .collect::<Result<Vec<_>, _>>()?,
        })
    }

    pub fn fill_for(&self, element: usize, hovered: Option<usize>) -> [f32; 4] {
        match hovered {
            Some(h) if h == element && !self.active.is_empty() => {
                self.active[element % self.active.len()]
            }
            _ => self.base,
        }
    }

    /// Fills for `count` elements
    pub fn fills(&self, count: usize, hovered: Option<usize>) -> Vec<[f32; 4]> {
        (0..count).map(|i| self.fill_for(i, hovered)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_for_hovered_element() {
        let style = HoverStyle::try_new(
            "lightgrey",
            &["yellowgreen", "cornflowerblue", "seagreen", "slateblue"],
        )
        .unwrap();
        let grey = parse_css_color("lightgrey").unwrap();

        assert_eq!(style.fill_for(1, None), grey);
        assert_eq!(style.fill_for(1, Some(2)), grey);
        assert_eq!(
            style.fill_for(1, Some(1)),
            parse_css_color("cornflowerblue").unwrap()
        );

        let fills = style.fills(4, Some(3));
        assert_eq!(&fills[..3], &[grey, grey, grey]);
        assert_eq!(fills[3], parse_css_color("slateblue").unwrap());
    }

    #[test]
    fn test_active_colors_cycle() {
        let style = HoverStyle::try_new("#cccccc", &["red"]).unwrap();
        assert_eq!(style.fill_for(5, Some(5)), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_invalid_colors() {
        assert_eq!(
            HoverStyle::try_new("lightgrey", &[]).unwrap_err(),
            ScaleError::EmptyRange
        );
        assert!(matches!(
            HoverStyle::try_new("nope", &["red"]),
            Err(ScaleError::InvalidColor(_))
        ));
    }
}
