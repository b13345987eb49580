//! End-to-end match scenarios.
//!
//! These tests run the full pipeline over many seeds and check the
//! statistical shape of the results:
//! - Evenly matched Tier 1 teams score in a realistic band
//! - Five-man rosters still play 240 minutes
//! - Stronger rosters win most of the time
//! - Empty rosters produce zero lines and lose

use hoopsim::{
    simulate_game, Availability, Player, Position, Side, SimulationOptions, StatLine, Team, Tier,
};

fn roster(id: u32, rating: f64, count: u32) -> Team {
    Team::new(id, format!("Team {id}")).with_players(
        (0..count).map(|i| Player::new(id * 100 + i, format!("Player {i}"), Position::ALL[i as usize % 5], rating)),
    )
}

/// Scenario A: two Tier 1 teams clustered at 75 score in a realistic band.
#[test]
fn test_even_teams_realistic_scores() {
    let home = roster(1, 75.0, 13);
    let away = roster(2, 75.0, 13);

    let games = 200;
    let mut scores = Vec::with_capacity(games * 2);
    for seed in 0..games as u64 {
        let result = simulate_game(&home, &away, &SimulationOptions::default().with_seed(seed));
        assert_ne!(result.home.score, result.away.score, "seed {seed} tied");
        scores.push(result.home.score);
        scores.push(result.away.score);
    }

    let n = scores.len() as f64;
    let mean = scores.iter().sum::<u32>() as f64 / n;
    let sd = (scores.iter().map(|&s| (f64::from(s) - mean).powi(2)).sum::<f64>() / n).sqrt();
    let in_band = scores.iter().filter(|&&s| (80..=130).contains(&s)).count();

    assert!((95.0..=120.0).contains(&mean), "mean score {mean:.1}");
    assert!(sd < 12.0, "score sd {sd:.1}");
    assert!(
        in_band as f64 / n >= 0.95,
        "only {in_band} of {} scores in 80-130",
        scores.len()
    );
}

/// Scenario B: exactly five available players still fill 240 minutes.
#[test]
fn test_five_man_roster() {
    let mut short = roster(1, 75.0, 8);
    for player in &mut short.roster[5..] {
        player.availability = Availability::Out;
    }
    let full = roster(2, 75.0, 13);

    for seed in 0..20 {
        let result = simulate_game(&short, &full, &SimulationOptions::default().with_seed(seed));
        let lines = &result.home.lines;

        assert_eq!(lines.len(), 8);
        assert_eq!(result.home.totals.minutes, 240);
        for line in &lines[..5] {
            assert_eq!(line.minutes, 48);
            assert_eq!(line.games_started, 1);
        }
        for line in &lines[5..] {
            assert_eq!(*line, StatLine::empty(line.player_id));
        }
    }
}

/// Scenario C: a 95-rated roster beats a 55-rated one, even on the road.
#[test]
fn test_stronger_roster_wins() {
    let weak = roster(1, 55.0, 13);
    let strong = roster(2, 95.0, 13);

    let games = 100;
    let mut wins = 0;
    let mut margin = 0i64;
    for seed in 0..games {
        let result = simulate_game(&weak, &strong, &SimulationOptions::default().with_seed(seed));
        if result.winner == Side::Away {
            wins += 1;
        }
        margin -= result.home_margin();
    }

    assert!(wins > 80, "strong roster won {wins} of {games}");
    assert!(margin as f64 / games as f64 > 5.0, "mean margin {}", margin as f64 / games as f64);
}

/// Scenario D: a team with nobody available records zeros and loses.
#[test]
fn test_no_eligible_players() {
    let mut empty = roster(1, 75.0, 10);
    for player in &mut empty.roster {
        player.availability = Availability::Out;
    }
    let opponent = roster(2, 75.0, 13);

    for seed in 0..10 {
        let result = simulate_game(&opponent, &empty, &SimulationOptions::default().with_seed(seed));
        assert_eq!(result.away.lines.len(), 10);
        assert!(result
            .away
            .lines
            .iter()
            .all(|l| *l == StatLine::empty(l.player_id)));
        assert_eq!(result.away.score, 0);
        assert_eq!(result.winner, Side::Home);
    }
}

/// Lower tiers score less on average.
#[test]
fn test_tiers_order_scoring() {
    let home = roster(1, 75.0, 13);
    let away = roster(2, 75.0, 13);

    let mean_total = |tier: Tier| -> f64 {
        let total: u32 = (0..100)
            .map(|seed| {
                let options = SimulationOptions::default().with_seed(seed).with_tier(tier);
                let result = simulate_game(&home, &away, &options);
                result.home.score + result.away.score
            })
            .sum();
        f64::from(total) / 100.0
    };

    assert!(mean_total(Tier::One) > mean_total(Tier::Three));
}

/// Playoff games still produce valid results with clutch players.
#[test]
fn test_playoff_game() {
    let mut home = roster(1, 80.0, 12);
    for player in &mut home.roster {
        player.attributes.clutch = 95.0;
    }
    let away = roster(2, 80.0, 12);

    let options = SimulationOptions::default().with_playoffs(true).with_seed(5);
    let result = simulate_game(&home, &away, &options);
    assert_ne!(result.home.score, result.away.score);
    assert!(result.home.lines.iter().all(StatLine::is_consistent));
}
