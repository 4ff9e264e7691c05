use super::candidate::Candidate;

pub const MOTIVATION_WEIGHT: f64 = 0.35;
pub const SKILL_WEIGHT: f64 = 0.35;
pub const ROLE_WEIGHT: f64 = 0.15;
pub const EXPERIENCE_WEIGHT: f64 = 0.15;

/// Pre-weighted role-diversity reward. Deliberately applied under
/// ROLE_WEIGHT again, so a distinct-role pair contributes 0.15 * 0.15.
const ROLE_DIVERSITY_BONUS: f64 = 0.15;

/// Motivation gaps wider than this count the same as this.
const MOTIVATION_GAP_CAP: f64 = 4.0;

/// Experience gaps are normalized over at least this many years, so small
/// absolute gaps near zero are not inflated to near-zero similarity.
const MIN_EXPERIENCE_RANGE: f64 = 10.0;

/// Symmetric affinity between two candidates, in [0, 1].
pub fn pair_score(a: &Candidate, b: &Candidate) -> f64 {
    MOTIVATION_WEIGHT * motivation_similarity(a, b)
        + SKILL_WEIGHT * skill_similarity(a, b)
        + ROLE_WEIGHT * role_bonus(a, b)
        + EXPERIENCE_WEIGHT * experience_similarity(a, b)
}

fn motivation_similarity(a: &Candidate, b: &Candidate) -> f64 {
    let gap = f64::from((a.motivation - b.motivation).abs());
    1.0 - gap.min(MOTIVATION_GAP_CAP) / MOTIVATION_GAP_CAP
}

fn skill_similarity(a: &Candidate, b: &Candidate) -> f64 {
    let intersection = a.skills.intersection(&b.skills).count();
    let union = a.skills.union(&b.skills).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64
}

fn role_bonus(a: &Candidate, b: &Candidate) -> f64 {
    match (&a.role, &b.role) {
        (Some(left), Some(right)) if left != right => ROLE_DIVERSITY_BONUS,
        _ => 0.0,
    }
}

fn experience_similarity(a: &Candidate, b: &Candidate) -> f64 {
    let gap = f64::from((a.years_experience - b.years_experience).abs());
    1.0 - gap / gap.max(MIN_EXPERIENCE_RANGE)
}

/// Whole-team diversity bonus, recomputed from scratch each call. Teams are
/// small, so the from-scratch sweep is cheap.
pub fn team_bonus(members: &[&Candidate]) -> f64 {
    let distinct_roles = members
        .iter()
        .filter_map(|member| member.role.as_deref())
        .collect::<std::collections::BTreeSet<_>>()
        .len();

    let distinct_skills = members
        .iter()
        .flat_map(|member| member.skills.iter())
        .collect::<std::collections::BTreeSet<_>>()
        .len();

    let mut bonus = 0.0;
    if distinct_roles >= 3 {
        bonus += 0.2;
    }
    if distinct_skills >= 8 {
        bonus += 0.1;
    }
    bonus
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn candidate(role: Option<&str>, skills: &[&str], motivation: i32, exp: i32) -> Candidate {
        Candidate {
            participant_id: Uuid::new_v4(),
            first_name: String::new(),
            last_name: String::new(),
            role: role.map(String::from),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            motivation,
            years_experience: exp,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let sum = MOTIVATION_WEIGHT + SKILL_WEIGHT + ROLE_WEIGHT + EXPERIENCE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pair_score_is_symmetric() {
        let a = candidate(Some("backend"), &["rust", "sql"], 4, 2);
        let b = candidate(Some("frontend"), &["js", "sql"], 1, 9);
        assert_eq!(pair_score(&a, &b), pair_score(&b, &a));
    }

    #[test]
    fn pair_score_stays_in_unit_interval() {
        let extremes = [
            candidate(None, &[], 0, 0),
            candidate(Some("a"), &["x"], 1000, 1000),
            candidate(Some("b"), &["x", "y", "z"], 0, 50),
        ];
        for a in &extremes {
            for b in &extremes {
                let score = pair_score(a, b);
                assert!((0.0..=1.0).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn identical_candidates_with_same_role_score_below_one() {
        // Same role means no role bonus, so even a perfect match on the
        // other three signals cannot reach 1.0.
        let a = candidate(Some("backend"), &["rust"], 3, 5);
        let score = pair_score(&a, &a.clone());
        assert!((score - (MOTIVATION_WEIGHT + SKILL_WEIGHT + EXPERIENCE_WEIGHT)).abs() < 1e-9);
    }

    #[test]
    fn distinct_roles_contribute_two_stage_bonus() {
        let a = candidate(Some("backend"), &["rust"], 3, 5);
        let b = candidate(Some("frontend"), &["rust"], 3, 5);
        let same = candidate(Some("backend"), &["rust"], 3, 5);

        let with_bonus = pair_score(&a, &b);
        let without = pair_score(&a, &same);
        assert!((with_bonus - without - 0.15 * 0.15).abs() < 1e-9);
    }

    #[test]
    fn jaccard_edge_cases() {
        let disjoint_a = candidate(None, &["rust"], 0, 0);
        let disjoint_b = candidate(None, &["go"], 0, 0);
        assert_eq!(skill_similarity(&disjoint_a, &disjoint_b), 0.0);

        let same = candidate(None, &["rust", "sql"], 0, 0);
        assert_eq!(skill_similarity(&same, &same.clone()), 1.0);

        let empty = candidate(None, &[], 0, 0);
        let sim = skill_similarity(&empty, &empty.clone());
        assert_eq!(sim, 0.0);
        assert!(!sim.is_nan());
    }

    #[test]
    fn motivation_gap_is_capped_at_four() {
        let low = candidate(None, &[], 0, 0);
        let high = candidate(None, &[], 9, 0);
        let capped = candidate(None, &[], 4, 0);
        assert_eq!(
            motivation_similarity(&low, &high),
            motivation_similarity(&low, &capped)
        );
        assert_eq!(motivation_similarity(&low, &high), 0.0);
    }

    #[test]
    fn small_experience_gaps_stay_similar() {
        let a = candidate(None, &[], 0, 0);
        let b = candidate(None, &[], 0, 2);
        // A 2-year gap over the 10-year floor leaves 0.8 similarity.
        assert!((experience_similarity(&a, &b) - 0.8).abs() < 1e-9);

        let far = candidate(None, &[], 0, 40);
        assert_eq!(experience_similarity(&a, &far), 0.0);
    }

    #[test]
    fn team_bonus_thresholds() {
        let members = [
            candidate(Some("backend"), &["a", "b", "c"], 0, 0),
            candidate(Some("frontend"), &["d", "e", "f"], 0, 0),
            candidate(Some("design"), &["g", "h"], 0, 0),
        ];
        let refs: Vec<&Candidate> = members.iter().collect();
        // 3 distinct roles and 8 distinct skills: both bonuses apply.
        assert!((team_bonus(&refs) - 0.3).abs() < 1e-9);

        let two = refs[..2].to_vec();
        assert_eq!(team_bonus(&two), 0.0);
        assert_eq!(team_bonus(&[]), 0.0);
    }
}
