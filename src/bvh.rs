//! Arena-based bounding volume hierarchy over mesh triangles.
//!
//! Nodes live in a flat `Vec` and reference their children by index, keeping
//! the whole tree relocatable and cache friendly. The tree is built once and
//! never mutated, so concurrent `&self` queries need no synchronization.

use crate::aabb::Aabb;
use crate::distance::triangle::{TriangleFeature, closest_point_on_triangle};
use crate::float_types::Real;
use crate::mesh::TriangleMesh;
use core::cmp::Ordering;
use nalgebra::Point3;

#[cfg(feature = "parallel")]
use rayon::join;

/// Triangles per leaf. A leaf threshold bounds recursion depth even when the
/// centroid split degenerates (e.g. co-located triangles).
const LEAF_SIZE: usize = 8;

/// Subtrees smaller than this are built sequentially to avoid oversubscription.
#[cfg(feature = "parallel")]
const PARALLEL_THRESHOLD: usize = 4096;

#[derive(Debug, Clone, Copy)]
struct BvhNode {
    aabb: Aabb,
    /// Child arena indices; unused when `count > 0`.
    left: u32,
    right: u32,
    /// Leaf range into [`Bvh::prims`]; `count == 0` marks an internal node.
    first: u32,
    count: u32,
}

/// Binary tree of nested bounding boxes accelerating nearest-triangle queries.
#[derive(Debug, Clone)]
pub struct Bvh {
    nodes: Vec<BvhNode>,
    /// Triangle indices, reordered so every leaf owns a contiguous range.
    prims: Vec<u32>,
}

/// Result of a nearest-triangle query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestHit {
    pub face: usize,
    pub point: Point3<Real>,
    pub feature: TriangleFeature,
    pub distance_squared: Real,
}

impl Bvh {
    /// Build the hierarchy over all triangles of `mesh` by recursive median
    /// splits of triangle centroids along the widest centroid axis.
    pub fn build(mesh: &TriangleMesh) -> Self {
        let n = mesh.face_count();
        if n == 0 {
            return Bvh {
                nodes: Vec::new(),
                prims: Vec::new(),
            };
        }

        let boxes: Vec<Aabb> = (0..n)
            .map(|i| {
                let (a, b, c) = mesh.triangle(i);
                let mut aabb = Aabb::new(a, a);
                aabb.grow(&b);
                aabb.grow(&c);
                aabb
            })
            .collect();
        let centroids: Vec<Point3<Real>> = (0..n)
            .map(|i| {
                let (a, b, c) = mesh.triangle(i);
                Point3::from((a.coords + b.coords + c.coords) / 3.0)
            })
            .collect();

        let mut prims: Vec<u32> = (0..n as u32).collect();
        let nodes = build_subtree(&mut prims, 0, &boxes, &centroids);
        Bvh { nodes, prims }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Bounding box of the whole primitive set.
    pub fn root_aabb(&self) -> Option<Aabb> {
        self.nodes.first().map(|node| node.aabb)
    }

    /// Branch-and-bound nearest-triangle search. Returns `None` only for an
    /// empty tree.
    ///
    /// The child whose box is closer to `p` is always descended first; the
    /// other child is pruned when its box cannot beat the best squared
    /// distance found so far.
    pub fn nearest(&self, mesh: &TriangleMesh, p: &Point3<Real>) -> Option<NearestHit> {
        let root = self.nodes.first()?;

        let mut best: Option<NearestHit> = None;
        let mut best_d2 = Real::MAX;
        let mut stack: Vec<(u32, Real)> = vec![(0, root.aabb.distance_squared(p))];

        while let Some((index, bound)) = stack.pop() {
            if bound >= best_d2 {
                continue;
            }
            let node = &self.nodes[index as usize];

            if node.count > 0 {
                let range = node.first as usize..(node.first + node.count) as usize;
                for &tri in &self.prims[range] {
                    let (a, b, c) = mesh.triangle(tri as usize);
                    let (point, feature) = closest_point_on_triangle(p, &a, &b, &c);
                    let d2 = (p - point).norm_squared();
                    if d2 < best_d2 {
                        best_d2 = d2;
                        best = Some(NearestHit {
                            face: tri as usize,
                            point,
                            feature,
                            distance_squared: d2,
                        });
                    }
                }
            } else {
                let left_d2 = self.nodes[node.left as usize].aabb.distance_squared(p);
                let right_d2 = self.nodes[node.right as usize].aabb.distance_squared(p);

                // Push the farther child first so the nearer one pops next.
                if left_d2 <= right_d2 {
                    if right_d2 < best_d2 {
                        stack.push((node.right, right_d2));
                    }
                    if left_d2 < best_d2 {
                        stack.push((node.left, left_d2));
                    }
                } else {
                    if left_d2 < best_d2 {
                        stack.push((node.left, left_d2));
                    }
                    if right_d2 < best_d2 {
                        stack.push((node.right, right_d2));
                    }
                }
            }
        }

        best
    }
}

/// Build the subtree over `prims`, a contiguous slice of the final primitive
/// array starting at absolute offset `base`. Returns an arena whose root sits
/// at index 0 with child indices local to the returned vec; callers splice
/// sub-arenas together with an index fixup.
fn build_subtree(
    prims: &mut [u32],
    base: u32,
    boxes: &[Aabb],
    centroids: &[Point3<Real>],
) -> Vec<BvhNode> {
    let mut aabb = boxes[prims[0] as usize];
    for &tri in prims.iter().skip(1) {
        aabb = aabb.merged(&boxes[tri as usize]);
    }

    if prims.len() <= LEAF_SIZE {
        return vec![BvhNode {
            aabb,
            left: 0,
            right: 0,
            first: base,
            count: prims.len() as u32,
        }];
    }

    // Median split along the axis where the centroids spread the most.
    let mut centroid_box = Aabb::new(
        centroids[prims[0] as usize],
        centroids[prims[0] as usize],
    );
    for &tri in prims.iter().skip(1) {
        centroid_box.grow(&centroids[tri as usize]);
    }
    let axis = centroid_box.longest_axis();

    let mid = prims.len() / 2;
    prims.select_nth_unstable_by(mid, |&a, &b| {
        centroids[a as usize][axis]
            .partial_cmp(&centroids[b as usize][axis])
            .unwrap_or(Ordering::Equal)
    });

    #[cfg(feature = "parallel")]
    let total = prims.len();
    let (left_half, right_half) = prims.split_at_mut(mid);
    let right_base = base + mid as u32;

    #[cfg(feature = "parallel")]
    let (left_arena, right_arena) = if total >= PARALLEL_THRESHOLD {
        join(
            || build_subtree(left_half, base, boxes, centroids),
            || build_subtree(right_half, right_base, boxes, centroids),
        )
    } else {
        (
            build_subtree(left_half, base, boxes, centroids),
            build_subtree(right_half, right_base, boxes, centroids),
        )
    };
    #[cfg(not(feature = "parallel"))]
    let (left_arena, right_arena) = (
        build_subtree(left_half, base, boxes, centroids),
        build_subtree(right_half, right_base, boxes, centroids),
    );

    let left_len = left_arena.len() as u32;
    let mut nodes = Vec::with_capacity(1 + left_arena.len() + right_arena.len());
    nodes.push(BvhNode {
        aabb,
        left: 1,
        right: 1 + left_len,
        first: 0,
        count: 0,
    });
    nodes.extend(left_arena.into_iter().map(|mut node| {
        if node.count == 0 {
            node.left += 1;
            node.right += 1;
        }
        node
    }));
    nodes.extend(right_arena.into_iter().map(|mut node| {
        if node.count == 0 {
            node.left += 1 + left_len;
            node.right += 1 + left_len;
        }
        node
    }));
    nodes
}
