//! Test data builders for creating test objects

use scatter_editor::{Point, PointFormData};

/// Builder for creating test Points
pub struct PointBuilder {
    id: String,
    x: f64,
    y: f64,
    label: String,
}

impl PointBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            x: 0.0,
            y: 0.0,
            label: id.to_string(),
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    pub fn form_data(&self) -> PointFormData {
        PointFormData::new(self.x, self.y, self.label.clone())
    }

    pub fn build(self) -> Point {
        Point::new(self.id, self.x, self.y, self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_builder() {
        let point = PointBuilder::new("p").at(1.5, 2.5).label("Label").build();

        assert_eq!(point.id.as_str(), "p");
        assert_eq!(point.x, 1.5);
        assert_eq!(point.y, 2.5);
        assert_eq!(point.label, "Label");
    }
}
