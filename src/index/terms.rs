//! Built-in index vocabulary.
//!
//! The closed list of domain terms the index generator looks for.
//! Canonical casing here is what appears in the generated page,
//! regardless of how a chapter spells the term.

/// Terms to explicitly index (can be extended via `--terms`).
pub const BUILTIN_TERMS: [&str; 57] = [
    "BCC",
    "Body-Centered Cubic",
    "Octree",
    "Morton",
    "Hilbert",
    "SFC",
    "Isotropy",
    "Anisotropy",
    "Voronoi",
    "Truncated Octahedron",
    "Parity",
    "Coordinate",
    "Lattice",
    "Sampling",
    "Nyquist",
    "Galactic128",
    "Index64",
    "Route64",
    "Hilbert64",
    "Frame Registry",
    "Container",
    "Streaming",
    "Compression",
    "Delta Encoding",
    "SIMD",
    "AVX2",
    "NEON",
    "BMI2",
    "GPU",
    "CUDA",
    "Metal",
    "Vulkan",
    "Pathfinding",
    "A*",
    "Dijkstra",
    "Occupancy Grid",
    "SLAM",
    "Geospatial",
    "WGS84",
    "ECEF",
    "ENU",
    "GIS",
    "Molecular Dynamics",
    "Crystallography",
    "CFD",
    "Voxel",
    "LOD",
    "Level of Detail",
    "Procedural Generation",
    "Distributed",
    "Sharding",
    "Arrow",
    "Parquet",
    "Machine Learning",
    "GNN",
    "Point Cloud",
    "PyTorch",
];
