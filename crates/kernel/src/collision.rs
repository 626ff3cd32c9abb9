//! Proximity collision passes.
//!
//! Both passes use plain Euclidean distance against a single radius; there is
//! no broad phase, entity counts stay small.

use glam::Vec3;

use crate::entity::{Enemy, Projectile};

/// A projectile and the enemy it destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile: Projectile,
    pub enemy: Enemy,
}

/// Remove every projectile/enemy pair closer than `radius`.
///
/// Projectiles are scanned newest first; each one takes out at most the
/// newest enemy in range and then stops scanning. Surviving entities keep
/// their relative order. Hits are returned in resolution order.
pub fn resolve_projectile_hits(
    projectiles: &mut Vec<Projectile>,
    enemies: &mut Vec<Enemy>,
    radius: f32,
) -> Vec<Hit> {
    let mut hits = Vec::new();
    for i in (0..projectiles.len()).rev() {
        let at = projectiles[i].position;
        let target = (0..enemies.len())
            .rev()
            .find(|&j| enemies[j].position.distance(at) < radius);
        if let Some(j) = target {
            hits.push(Hit {
                projectile: projectiles.remove(i),
                enemy: enemies.remove(j),
            });
        }
    }
    hits
}

/// The first enemy, in iteration order, touching the player.
pub fn first_player_contact(player: Vec3, enemies: &[Enemy], radius: f32) -> Option<&Enemy> {
    enemies
        .iter()
        .find(|enemy| enemy.position.distance(player) < radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeshot_common::EntityId;

    fn enemy(x: f32, z: f32) -> Enemy {
        Enemy {
            id: EntityId::new(),
            position: Vec3::new(x, 0.5, z),
        }
    }

    fn projectile(x: f32, z: f32) -> Projectile {
        Projectile {
            id: EntityId::new(),
            position: Vec3::new(x, 0.5, z),
        }
    }

    #[test]
    fn coincident_pair_is_removed() {
        let mut ps = vec![projectile(1.0, 5.0)];
        let mut es = vec![enemy(1.0, 5.0)];
        let hits = resolve_projectile_hits(&mut ps, &mut es, 1.0);
        assert_eq!(hits.len(), 1);
        assert!(ps.is_empty());
        assert!(es.is_empty());
    }

    #[test]
    fn exactly_one_unit_apart_is_a_miss() {
        let mut ps = vec![projectile(0.0, 5.0)];
        let mut es = vec![enemy(1.0, 5.0)];
        assert!(resolve_projectile_hits(&mut ps, &mut es, 1.0).is_empty());
        assert_eq!(ps.len(), 1);
        assert_eq!(es.len(), 1);
    }

    #[test]
    fn one_projectile_destroys_at_most_one_enemy() {
        let mut ps = vec![projectile(0.0, 5.0)];
        let first = enemy(0.0, 5.2);
        let second = enemy(0.0, 4.8);
        let mut es = vec![first, second];
        let hits = resolve_projectile_hits(&mut ps, &mut es, 1.0);
        assert_eq!(hits.len(), 1);
        // Newest enemy in range is taken first.
        assert_eq!(hits[0].enemy.id, second.id);
        assert_eq!(es, vec![first]);
    }

    #[test]
    fn several_pairs_resolve_in_one_pass() {
        let a = projectile(-5.0, 5.0);
        let b = projectile(5.0, 5.0);
        let miss = projectile(0.0, -5.0);
        let mut ps = vec![a, miss, b];
        let mut es = vec![enemy(5.0, 5.3), enemy(-5.0, 4.9), enemy(12.0, 0.0)];
        let hits = resolve_projectile_hits(&mut ps, &mut es, 1.0);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].projectile.id, b.id);
        assert_eq!(hits[1].projectile.id, a.id);
        assert_eq!(ps, vec![miss]);
        assert_eq!(es.len(), 1);
        assert_eq!(es[0].position.x, 12.0);
    }

    #[test]
    fn two_projectiles_cannot_share_one_enemy() {
        let mut ps = vec![projectile(0.0, 5.0), projectile(0.0, 5.1)];
        let mut es = vec![enemy(0.0, 5.0)];
        let hits = resolve_projectile_hits(&mut ps, &mut es, 1.0);
        assert_eq!(hits.len(), 1);
        assert_eq!(ps.len(), 1);
        assert!(es.is_empty());
    }

    #[test]
    fn player_contact_picks_first_in_order() {
        let near = enemy(0.0, 0.5);
        let nearer = enemy(0.0, 0.1);
        let es = vec![enemy(9.0, 9.0), near, nearer];
        let hit = first_player_contact(Vec3::new(0.0, 0.5, 0.0), &es, 1.0);
        assert_eq!(hit.map(|e| e.id), Some(near.id));
    }

    #[test]
    fn no_contact_when_everyone_is_far() {
        let es = vec![enemy(3.0, 3.0)];
        assert!(first_player_contact(Vec3::new(0.0, 0.5, 0.0), &es, 1.0).is_none());
    }
}
