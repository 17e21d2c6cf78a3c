//! Floor Plan Data Structures
//!
//! The host-supplied document that drives a render pass. Field names follow
//! the JSON shape produced by the surrounding application.

use serde::{Deserialize, Serialize};

/// Size (in venue units) assumed for objects that carry no geometry.
pub const DEFAULT_OBJECT_SIZE: f32 = 10.0;

/// Rectangular bounds of the floor plan in venue units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    /// Extent along the x axis
    pub width: f32,

    /// Extent along the y axis
    pub length: f32,

    /// Unit label (e.g. "ft", "m")
    #[serde(default)]
    pub unit: String,
}

impl Venue {
    pub fn new(width: f32, length: f32, unit: impl Into<String>) -> Self {
        Self {
            width,
            length,
            unit: unit.into(),
        }
    }

    /// Whether both dimensions are finite and strictly positive
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.length.is_finite() && self.width > 0.0 && self.length > 0.0
    }
}

/// Someone assigned to a layout object, shown in the detail panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Avatar URI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A single placed object on the floor plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutObject {
    pub id: String,

    /// Semantic type ("stage", "round-table", "booth", ...)
    #[serde(rename = "type")]
    pub kind: String,

    /// Anchor x: left edge for rectangles, center for circles
    pub x: f32,

    /// Anchor y: top edge for rectangles, center for circles
    pub y: f32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,

    /// Rotation around the anchor, in degrees
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Fill override as a hex string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<Member>,
}

/// Resolved shape of a layout object, in venue units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ObjectGeometry {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl LayoutObject {
    /// Create a rectangular object with default size
    pub fn new(id: impl Into<String>, kind: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            x,
            y,
            width: None,
            height: None,
            radius: None,
            rotation: None,
            label: None,
            color: None,
            members: Vec::new(),
        }
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation = Some(degrees);
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Circle when a usable radius is present, otherwise a rectangle whose
    /// missing sides fall back to [`DEFAULT_OBJECT_SIZE`]. A zero, negative or
    /// non-finite radius counts as missing.
    pub fn geometry(&self) -> ObjectGeometry {
        match self.radius.filter(|r| r.is_finite() && *r > 0.0) {
            Some(radius) => ObjectGeometry::Circle { radius },
            None => ObjectGeometry::Rect {
                width: self.width.unwrap_or(DEFAULT_OBJECT_SIZE),
                height: self.height.unwrap_or(DEFAULT_OBJECT_SIZE),
            },
        }
    }

    /// Rotation in radians (0 when unset)
    pub fn rotation_radians(&self) -> f32 {
        self.rotation.unwrap_or(0.0).to_radians()
    }
}

/// Root value of a render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutData {
    pub venue: Venue,

    #[serde(default)]
    pub objects: Vec<LayoutObject>,
}

impl LayoutData {
    pub fn new(venue: Venue) -> Self {
        Self {
            venue,
            objects: Vec::new(),
        }
    }

    pub fn with_object(mut self, object: LayoutObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Look up an object by id
    pub fn object(&self, id: &str) -> Option<&LayoutObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.object(id).is_some()
    }
}
