//! Hero scene: a handful of floating primitives posed as a pure function of
//! elapsed time, a slowly orbiting camera, and the CSS-only stand-in.

use std::f64::consts::TAU;

/// Per-frame increments in the scene are specified at this rate.
const REFERENCE_FPS: f64 = 60.0;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Primitive {
    Cube { edge: f64 },
    Sphere { radius: f64 },
    Label { text: &'static str, height: f64 },
}

impl Primitive {
    /// World-space extent used to size the projected element.
    pub fn extent(&self) -> f64 {
        match self {
            Self::Cube { edge } => *edge,
            Self::Sphere { radius } => radius * 2.0,
            Self::Label { height, .. } => *height,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::Cube { .. } => "scene-cube",
            Self::Sphere { .. } => "scene-sphere",
            Self::Label { .. } => "scene-label",
        }
    }
}

/// Gentle bob and sway applied on top of a mesh's own motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Float {
    pub speed: f64,
    pub rotation_intensity: f64,
    pub float_intensity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Spins on X and Y; bobs vertically.
    Tumble,
    /// Spins on X and Z; drifts horizontally.
    Drift,
    /// Holds still apart from the float.
    Rest,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshSpec {
    pub primitive: Primitive,
    pub origin: Vec3,
    pub color: &'static str,
    pub speed: f64,
    pub motion: Motion,
    pub float: Float,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: Vec3,
    /// Euler angles in radians.
    pub rotation: Vec3,
}

impl MeshSpec {
    /// Pose after `elapsed` seconds. `phase` desynchronises meshes that
    /// share a float speed.
    pub fn pose_at(&self, elapsed: f64, phase: f64) -> Pose {
        let t = elapsed.max(0.0);
        let frames = t * REFERENCE_FPS;
        let mut position = self.origin;
        let mut rotation = Vec3::default();

        match self.motion {
            Motion::Tumble => {
                rotation.x = 0.01 * self.speed * frames;
                rotation.y = 0.01 * self.speed * frames;
                position.y = self.origin.y + (t * self.speed).sin() * 0.2;
            }
            Motion::Drift => {
                rotation.x = 0.005 * self.speed * frames;
                rotation.z = 0.005 * self.speed * frames;
                position.x = self.origin.x + (t * self.speed).cos() * 0.3;
            }
            Motion::Rest => {}
        }

        let float_t = t * self.float.speed + phase;
        position.y += float_t.sin() * 0.1 * self.float.float_intensity;
        rotation.x += (float_t / 4.0).cos() * 0.125 * self.float.rotation_intensity;
        rotation.y += (float_t / 4.0).sin() * 0.125 * self.float.rotation_intensity;
        rotation.z += (float_t / 4.0).sin() * 0.05 * self.float.rotation_intensity;

        Pose { position, rotation }
    }
}

/// Pinhole camera orbiting the origin on the horizontal plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub distance: f64,
    pub fov_degrees: f64,
    /// Same scale as orbit controls: 2.0 is one revolution every 30 s.
    pub auto_rotate_speed: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    /// Pixels per world unit at this depth.
    pub scale: f64,
    pub depth: f64,
}

impl Camera {
    pub fn orbit_angle(&self, elapsed: f64) -> f64 {
        (elapsed.max(0.0) * self.auto_rotate_speed * TAU / REFERENCE_FPS).rem_euclid(TAU)
    }

    /// Projects a world point into a `width` x `height` viewport. Points at or
    /// behind the camera plane are culled.
    pub fn project(&self, point: Vec3, elapsed: f64, width: f64, height: f64) -> Option<Projected> {
        let angle = self.orbit_angle(elapsed);
        let (sin, cos) = angle.sin_cos();
        let x = point.x * cos - point.z * sin;
        let z = point.x * sin + point.z * cos;
        let depth = self.distance - z;
        if depth <= 0.1 {
            return None;
        }

        let focal = (height / 2.0) / (self.fov_degrees.to_radians() / 2.0).tan();
        let scale = focal / depth;
        Some(Projected {
            x: width / 2.0 + x * scale,
            y: height / 2.0 - point.y * scale,
            scale,
            depth,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub index: usize,
    pub class: &'static str,
    pub label: Option<&'static str>,
    pub style: String,
    pub depth: f64,
}

/// Everything needed to draw the frame at `elapsed`, far meshes first.
pub fn render_frame(
    meshes: &[MeshSpec],
    camera: &Camera,
    elapsed: f64,
    width: f64,
    height: f64,
) -> Vec<SceneNode> {
    let mut nodes: Vec<SceneNode> = meshes
        .iter()
        .enumerate()
        .filter_map(|(index, mesh)| {
            let phase = index as f64 * 1.7;
            let pose = mesh.pose_at(elapsed, phase);
            let projected = camera.project(pose.position, elapsed, width, height)?;
            let size = mesh.primitive.extent() * projected.scale;
            let style = format!(
                "width: {size:.1}px; height: {size:.1}px; --mesh-color: {color}; \
                 transform: translate3d({x:.1}px, {y:.1}px, 0) translate(-50%, -50%) \
                 rotateX({rx:.3}rad) rotateY({ry:.3}rad) rotateZ({rz:.3}rad);",
                color = mesh.color,
                x = projected.x,
                y = projected.y,
                rx = pose.rotation.x,
                ry = pose.rotation.y - camera.orbit_angle(elapsed),
                rz = pose.rotation.z,
            );
            let label = match mesh.primitive {
                Primitive::Label { text, .. } => Some(text),
                _ => None,
            };
            Some(SceneNode {
                index,
                class: mesh.primitive.class(),
                label,
                style,
                depth: projected.depth,
            })
        })
        .collect();

    nodes.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    nodes
}

const CUBE_FLOAT: Float = Float {
    speed: 2.0,
    rotation_intensity: 1.0,
    float_intensity: 2.0,
};

const SPHERE_FLOAT: Float = Float {
    speed: 1.5,
    rotation_intensity: 2.0,
    float_intensity: 1.0,
};

pub const HERO_CAMERA: Camera = Camera {
    distance: 5.0,
    fov_degrees: 75.0,
    auto_rotate_speed: 0.5,
};

pub const HERO_MESHES: [MeshSpec; 7] = [
    MeshSpec {
        primitive: Primitive::Cube { edge: 0.5 },
        origin: Vec3::new(-3.0, 2.0, -2.0),
        color: "#3b82f6",
        speed: 0.8,
        motion: Motion::Tumble,
        float: CUBE_FLOAT,
    },
    MeshSpec {
        primitive: Primitive::Cube { edge: 0.5 },
        origin: Vec3::new(3.0, -1.0, -1.0),
        color: "#06b6d4",
        speed: 1.2,
        motion: Motion::Tumble,
        float: CUBE_FLOAT,
    },
    MeshSpec {
        primitive: Primitive::Sphere { radius: 0.3 },
        origin: Vec3::new(-2.0, -2.0, -3.0),
        color: "#8b5cf6",
        speed: 0.6,
        motion: Motion::Drift,
        float: SPHERE_FLOAT,
    },
    MeshSpec {
        primitive: Primitive::Sphere { radius: 0.3 },
        origin: Vec3::new(2.0, 3.0, -2.0),
        color: "#f59e0b",
        speed: 1.4,
        motion: Motion::Drift,
        float: SPHERE_FLOAT,
    },
    MeshSpec {
        primitive: Primitive::Cube { edge: 0.5 },
        origin: Vec3::new(0.0, -3.0, -4.0),
        color: "#ef4444",
        speed: 1.0,
        motion: Motion::Tumble,
        float: CUBE_FLOAT,
    },
    MeshSpec {
        primitive: Primitive::Sphere { radius: 0.3 },
        origin: Vec3::new(-4.0, 0.0, -1.0),
        color: "#10b981",
        speed: 0.9,
        motion: Motion::Drift,
        float: SPHERE_FLOAT,
    },
    MeshSpec {
        primitive: Primitive::Label {
            text: "PORTFOLIO",
            height: 0.8,
        },
        origin: Vec3::new(0.0, 0.0, 0.0),
        color: "#ffffff",
        speed: 1.0,
        motion: Motion::Rest,
        float: Float {
            speed: 1.0,
            rotation_intensity: 0.5,
            float_intensity: 0.5,
        },
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Orb,
    Tile,
    Diamond,
}

impl ShapeKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Orb => "float-shape float-orb",
            Self::Tile => "float-shape float-tile",
            Self::Diamond => "float-shape float-diamond",
        }
    }
}

/// A shape in the CSS-only hero. Motion comes from a keyframe animation;
/// only the timing differs per shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingShape {
    pub kind: ShapeKind,
    pub left_percent: f64,
    pub top_percent: f64,
    pub size_px: f64,
    pub color: &'static str,
    pub duration_secs: f64,
    pub delay_secs: f64,
}

impl FloatingShape {
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; width: {}px; height: {}px; --shape-color: {}; \
             animation-duration: {}s; animation-delay: {}s;",
            self.left_percent,
            self.top_percent,
            self.size_px,
            self.size_px,
            self.color,
            self.duration_secs,
            self.delay_secs,
        )
    }
}

pub static ABOUT_SHAPES: &[FloatingShape] = &[
    FloatingShape {
        kind: ShapeKind::Orb,
        left_percent: 18.0,
        top_percent: 22.0,
        size_px: 140.0,
        color: "#3b82f6",
        duration_secs: 6.0,
        delay_secs: 0.0,
    },
    FloatingShape {
        kind: ShapeKind::Tile,
        left_percent: 62.0,
        top_percent: 12.0,
        size_px: 56.0,
        color: "#8b5cf6",
        duration_secs: 7.5,
        delay_secs: 0.8,
    },
    FloatingShape {
        kind: ShapeKind::Diamond,
        left_percent: 72.0,
        top_percent: 64.0,
        size_px: 44.0,
        color: "#06b6d4",
        duration_secs: 5.2,
        delay_secs: 1.6,
    },
    FloatingShape {
        kind: ShapeKind::Orb,
        left_percent: 34.0,
        top_percent: 70.0,
        size_px: 36.0,
        color: "#f59e0b",
        duration_secs: 8.4,
        delay_secs: 2.4,
    },
];

pub static SKILLS_SHAPES: &[FloatingShape] = &[
    FloatingShape {
        kind: ShapeKind::Tile,
        left_percent: 12.0,
        top_percent: 30.0,
        size_px: 40.0,
        color: "#3b82f6",
        duration_secs: 6.0,
        delay_secs: 0.0,
    },
    FloatingShape {
        kind: ShapeKind::Tile,
        left_percent: 82.0,
        top_percent: 58.0,
        size_px: 40.0,
        color: "#8b5cf6",
        duration_secs: 7.0,
        delay_secs: 0.6,
    },
    FloatingShape {
        kind: ShapeKind::Tile,
        left_percent: 50.0,
        top_percent: 10.0,
        size_px: 40.0,
        color: "#06b6d4",
        duration_secs: 5.5,
        delay_secs: 1.2,
    },
    FloatingShape {
        kind: ShapeKind::Diamond,
        left_percent: 24.0,
        top_percent: 74.0,
        size_px: 40.0,
        color: "#f59e0b",
        duration_secs: 8.0,
        delay_secs: 1.8,
    },
    FloatingShape {
        kind: ShapeKind::Orb,
        left_percent: 70.0,
        top_percent: 24.0,
        size_px: 40.0,
        color: "#ef4444",
        duration_secs: 6.6,
        delay_secs: 2.4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn tumbling_cube_bobs_around_its_origin() {
        let cube = HERO_MESHES[0];
        let still_float = MeshSpec {
            float: Float {
                speed: 0.0,
                rotation_intensity: 0.0,
                float_intensity: 0.0,
            },
            ..cube
        };
        let pose = still_float.pose_at(1.0, 0.0);
        assert_abs_diff_eq!(pose.position.y, 2.0 + (0.8f64).sin() * 0.2, epsilon = 1e-12);
        assert_abs_diff_eq!(pose.rotation.x, 0.01 * 0.8 * 60.0, epsilon = 1e-12);
        assert_eq!(pose.position.x, cube.origin.x);
    }

    #[test]
    fn drifting_sphere_sways_horizontally() {
        let sphere = MeshSpec {
            float: Float {
                speed: 0.0,
                rotation_intensity: 0.0,
                float_intensity: 0.0,
            },
            ..HERO_MESHES[2]
        };
        let pose = sphere.pose_at(0.0, 0.0);
        assert_abs_diff_eq!(pose.position.x, -2.0 + 0.3, epsilon = 1e-12);
        assert_eq!(pose.position.y, -2.0);
    }

    #[test]
    fn meshes_do_not_move_in_lockstep() {
        let a = HERO_MESHES[0].pose_at(2.0, 0.0).position.y - HERO_MESHES[0].origin.y;
        let b = HERO_MESHES[1].pose_at(2.0, 1.7).position.y - HERO_MESHES[1].origin.y;
        assert!((a - b).abs() > 1e-3);
    }

    #[test]
    fn camera_completes_an_orbit_in_expected_time() {
        let camera = Camera {
            auto_rotate_speed: 2.0,
            ..HERO_CAMERA
        };
        assert_abs_diff_eq!(camera.orbit_angle(15.0), TAU / 2.0, epsilon = 1e-9);
        assert_abs_diff_eq!(camera.orbit_angle(22.5), TAU * 0.75, epsilon = 1e-9);
        assert_abs_diff_eq!(camera.orbit_angle(33.75), TAU / 8.0, epsilon = 1e-9);
    }

    #[test]
    fn origin_projects_to_viewport_centre() {
        let projected = HERO_CAMERA
            .project(Vec3::default(), 0.0, 1_200.0, 800.0)
            .expect("origin is in front of the camera");
        assert_abs_diff_eq!(projected.x, 600.0);
        assert_abs_diff_eq!(projected.y, 400.0);
        assert_abs_diff_eq!(projected.depth, 5.0);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        assert!(HERO_CAMERA.project(Vec3::new(0.0, 0.0, 6.0), 0.0, 100.0, 100.0).is_none());
    }

    #[test]
    fn nearer_points_project_larger() {
        let near = HERO_CAMERA.project(Vec3::new(0.0, 0.0, 1.0), 0.0, 800.0, 600.0).unwrap();
        let far = HERO_CAMERA.project(Vec3::new(0.0, 0.0, -4.0), 0.0, 800.0, 600.0).unwrap();
        assert!(near.scale > far.scale);
    }

    #[test]
    fn frame_is_painted_back_to_front() {
        let nodes = render_frame(&HERO_MESHES, &HERO_CAMERA, 0.0, 1_200.0, 800.0);
        assert_eq!(nodes.len(), HERO_MESHES.len());
        assert!(nodes.windows(2).all(|pair| pair[0].depth >= pair[1].depth));
        let label = nodes.iter().find(|node| node.label.is_some()).unwrap();
        assert_eq!(label.label, Some("PORTFOLIO"));
        assert_eq!(label.class, "scene-label");
    }

    #[test]
    fn css_shapes_have_staggered_timing() {
        for shapes in [ABOUT_SHAPES, SKILLS_SHAPES] {
            assert!(shapes.len() >= 3);
            for pair in shapes.windows(2) {
                assert!(pair[0].delay_secs < pair[1].delay_secs);
                assert!(pair[0].duration_secs != pair[1].duration_secs);
            }
        }
        let style = ABOUT_SHAPES[1].style();
        assert!(style.contains("animation-duration: 7.5s;"));
        assert!(style.contains("animation-delay: 0.8s;"));
    }
}
