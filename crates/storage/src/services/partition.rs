use std::cmp::Reverse;

use super::candidate::Candidate;
use super::scoring::{pair_score, team_bonus};

pub const DEFAULT_TEAM_SIZE: usize = 4;
pub const MIN_TEAM_SIZE: usize = 3;

/// Requested sizes below the minimum (or absent) fall back to the default.
pub fn effective_team_size(requested: Option<i32>) -> usize {
    match requested {
        Some(n) if n >= MIN_TEAM_SIZE as i32 => n as usize,
        _ => DEFAULT_TEAM_SIZE,
    }
}

/// One team of a planned partition, before anything is persisted.
#[derive(Debug)]
pub struct PlannedTeam {
    pub capacity: usize,
    pub members: Vec<Candidate>,
    pub score: f64,
}

/// Per-team capacities such that they sum to `total` and no two differ by
/// more than one. The first `total % teams` teams absorb the remainder.
pub fn balanced_capacities(total: usize, team_size: usize) -> Vec<usize> {
    let number_of_teams = total.div_ceil(team_size).max(1);
    let base = total / number_of_teams;
    let extra = total % number_of_teams;

    (0..number_of_teams)
        .map(|index| if index < extra { base + 1 } else { base })
        .collect()
}

/// Greedy partitioning: seed each team with one of the strongest candidates,
/// then place the rest one by one onto whichever open team gains the most.
/// Deterministic for a given input ordering; ties go to the first team in
/// iteration order.
pub fn partition(mut candidates: Vec<Candidate>, team_size: usize) -> Vec<PlannedTeam> {
    if candidates.is_empty() {
        return Vec::new();
    }

    // Motivation + experience as a cheap strength proxy; the sort is stable,
    // so ties keep their incoming order. Widened to i64: the extractor clamps
    // each field to non-negative i32, so their sum can exceed i32.
    candidates.sort_by_key(|c| Reverse(i64::from(c.motivation) + i64::from(c.years_experience)));

    let mut teams: Vec<PlannedTeam> = balanced_capacities(candidates.len(), team_size)
        .into_iter()
        .map(|capacity| PlannedTeam {
            capacity,
            members: Vec::new(),
            score: 0.0,
        })
        .collect();

    let mut remaining = candidates.into_iter();
    for team in &mut teams {
        if let Some(seed) = remaining.next() {
            team.members.push(seed);
        }
    }

    for candidate in remaining {
        let target = best_open_team(&teams, &candidate)
            // Integer-rounding edge case: every team is full, so place
            // ignoring capacity wherever the gain is highest.
            .unwrap_or_else(|| best_team_ignoring_capacity(&teams, &candidate));
        teams[target].members.push(candidate);
    }

    for team in &mut teams {
        team.score = team_score(&team.members);
    }

    teams
}

fn best_open_team(teams: &[PlannedTeam], candidate: &Candidate) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, team) in teams.iter().enumerate() {
        if team.members.len() >= team.capacity {
            continue;
        }
        let gain = marginal_gain(team, candidate);
        if best.is_none_or(|(_, best_gain)| gain > best_gain) {
            best = Some((index, gain));
        }
    }
    best.map(|(index, _)| index)
}

fn best_team_ignoring_capacity(teams: &[PlannedTeam], candidate: &Candidate) -> usize {
    let mut best = (0, f64::NEG_INFINITY);
    for (index, team) in teams.iter().enumerate() {
        let gain = marginal_gain(team, candidate);
        if gain > best.1 {
            best = (index, gain);
        }
    }
    best.0
}

/// Pairwise contribution against the current members, plus the change in
/// the team's diversity bonus from hypothetically adding the candidate.
fn marginal_gain(team: &PlannedTeam, candidate: &Candidate) -> f64 {
    let pair_contribution: f64 = team
        .members
        .iter()
        .map(|member| pair_score(member, candidate))
        .sum();

    let mut roster: Vec<&Candidate> = team.members.iter().collect();
    let bonus_before = team_bonus(&roster);
    roster.push(candidate);
    let bonus_after = team_bonus(&roster);

    pair_contribution + (bonus_after - bonus_before)
}

/// Final team score: all internal pairwise scores plus the diversity bonus.
fn team_score(members: &[Candidate]) -> f64 {
    let mut score = 0.0;
    for (index, a) in members.iter().enumerate() {
        for b in &members[index + 1..] {
            score += pair_score(a, b);
        }
    }

    let roster: Vec<&Candidate> = members.iter().collect();
    score + team_bonus(&roster)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use uuid::Uuid;

    use super::*;

    fn candidate(motivation: i32, exp: i32, role: &str, skills: &[&str]) -> Candidate {
        Candidate {
            participant_id: Uuid::new_v4(),
            first_name: String::new(),
            last_name: String::new(),
            role: if role.is_empty() {
                None
            } else {
                Some(role.to_string())
            },
            skills: skills.iter().map(|s| s.to_string()).collect(),
            motivation,
            years_experience: exp,
        }
    }

    fn pool(count: usize) -> Vec<Candidate> {
        (0..count)
            .map(|i| {
                candidate(
                    (i % 5) as i32,
                    (i % 7) as i32,
                    ["backend", "frontend", "design", ""][i % 4],
                    &["rust", "sql", "js", "css", "ml"][..(i % 5)],
                )
            })
            .collect()
    }

    #[test]
    fn effective_size_defaults_when_absent_or_too_small() {
        assert_eq!(effective_team_size(None), 4);
        assert_eq!(effective_team_size(Some(0)), 4);
        assert_eq!(effective_team_size(Some(2)), 4);
        assert_eq!(effective_team_size(Some(3)), 3);
        assert_eq!(effective_team_size(Some(6)), 6);
    }

    #[test]
    fn three_candidates_at_size_three_make_one_team() {
        assert_eq!(balanced_capacities(3, 3), vec![3]);
    }

    #[test]
    fn fifteen_candidates_at_size_four() {
        assert_eq!(balanced_capacities(15, 4), vec![4, 4, 4, 3]);
    }

    #[test]
    fn capacities_sum_to_total_and_differ_by_at_most_one() {
        for total in 1..60 {
            for size in 3..8 {
                let capacities = balanced_capacities(total, size);
                assert_eq!(capacities.iter().sum::<usize>(), total);
                let max = capacities.iter().max().unwrap();
                let min = capacities.iter().min().unwrap();
                assert!(max - min <= 1, "total={total} size={size}");
            }
        }
    }

    #[test]
    fn empty_pool_yields_no_teams() {
        assert!(partition(Vec::new(), 4).is_empty());
    }

    #[test]
    fn every_candidate_is_placed_exactly_once() {
        let candidates = pool(23);
        let ids: BTreeSet<Uuid> = candidates.iter().map(|c| c.participant_id).collect();

        let teams = partition(candidates, 4);
        let placed: Vec<Uuid> = teams
            .iter()
            .flat_map(|t| t.members.iter().map(|m| m.participant_id))
            .collect();

        assert_eq!(placed.len(), 23);
        assert_eq!(placed.iter().copied().collect::<BTreeSet<_>>(), ids);
    }

    #[test]
    fn no_team_exceeds_capacity_in_the_normal_path() {
        let teams = partition(pool(30), 5);
        for team in &teams {
            assert!(team.members.len() <= team.capacity);
        }
    }

    #[test]
    fn team_sizes_stay_balanced() {
        let teams = partition(pool(17), 4);
        let sizes: Vec<usize> = teams.iter().map(|t| t.members.len()).collect();
        assert_eq!(sizes.iter().sum::<usize>(), 17);
        assert!(sizes.iter().max().unwrap() - sizes.iter().min().unwrap() <= 1);
    }

    #[test]
    fn seeds_are_the_strongest_candidates() {
        let mut candidates = pool(12);
        candidates[7].motivation = 90;
        candidates[2].years_experience = 80;
        let strong_a = candidates[7].participant_id;
        let strong_b = candidates[2].participant_id;

        let teams = partition(candidates, 4);
        let seeds: BTreeSet<Uuid> = teams
            .iter()
            .map(|t| t.members[0].participant_id)
            .collect();
        assert!(seeds.contains(&strong_a));
        assert!(seeds.contains(&strong_b));
    }

    #[test]
    fn extreme_numeric_answers_do_not_break_the_sort() {
        // The extractor caps fields at i32::MAX individually, so the
        // strength sum must not be computed in i32.
        let mut candidates = pool(6);
        candidates[0].motivation = i32::MAX;
        candidates[0].years_experience = 1;
        let strongest = candidates[0].participant_id;

        let teams = partition(candidates, 3);
        assert_eq!(teams[0].members[0].participant_id, strongest);
    }

    #[test]
    fn identical_input_produces_identical_assignment() {
        let candidates = pool(19);
        let first = partition(candidates.clone(), 4);
        let second = partition(candidates, 4);

        let layout = |teams: &[PlannedTeam]| -> Vec<Vec<Uuid>> {
            teams
                .iter()
                .map(|t| t.members.iter().map(|m| m.participant_id).collect())
                .collect()
        };
        assert_eq!(layout(&first), layout(&second));
    }

    #[test]
    fn final_scores_are_non_negative() {
        let teams = partition(pool(14), 4);
        for team in &teams {
            assert!(team.score >= 0.0);
        }
    }
}
