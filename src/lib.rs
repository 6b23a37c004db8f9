//! Spatial constraint and interaction engine for a 3D room planner.
//!
//! The crate decides where fixtures may go and how pointer, touch, and key
//! input moves them. Items are kept on the room's walls, oriented per type,
//! checked for footprint overlap, and edited through batched, reversible
//! updates. Rendering, scene graphs, and persistence belong to the host: it
//! forwards input to [`engine::EditorCore`], applies the returned
//! [`engine::Action`]s, and re-materializes the scene from its item store.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction controller ([`engine::EditorCore`]) and host actions |
//! | [`doc`] | Placed items, partial updates, and the item store seam |
//! | [`registry`] | Per-type footprints and orientation policies |
//! | [`collision`] | Footprint overlap checks with clearance margin |
//! | [`walls`] | Wall lines, nearest-wall snapping, collision-aware snapping |
//! | [`placement`] | Randomized search for a free wall spot |
//! | [`batch`] | Coalescing per-item updates during a gesture |
//! | [`history`] | Bounded undo/redo of serializable snapshots |
//! | [`measure`] | Size and free-space readout for an item |
//! | [`camera`] | Orbit camera, viewport, and screen coordinates |
//! | [`pick`] | Resolving raycast hits to placed items |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`feedback`] | Highlight and collision outline seam |
//! | [`geometry`] | Vectors, rays, room extents |
//! | [`config`] | Tunables with environment overrides |
//! | [`consts`] | Shared numeric constants |

pub mod batch;
pub mod camera;
pub mod collision;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod feedback;
pub mod geometry;
pub mod history;
pub mod input;
pub mod measure;
pub mod pick;
pub mod placement;
pub mod registry;
pub mod walls;
