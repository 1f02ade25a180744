//! Static league content: the rules catalogue, the 2025 draft board, past
//! champions, and the punishment/sacko record. This data changes once a year
//! at most, so it ships with the binary instead of living in a table.

pub struct RuleCategory {
    pub name: &'static str,
    pub rules: &'static [Rule],
}

pub struct Rule {
    pub title: &'static str,
    pub body: &'static str,
}

pub const RULES: &[RuleCategory] = &[
    RuleCategory {
        name: "Roster & Lineup",
        rules: &[
            Rule {
                title: "Starting Lineup",
                body: "1 QB, 2 RB, 2 WR, 1 TE, 1 FLEX (RB/WR/TE), 1 K, 1 DEF",
            },
            Rule {
                title: "Bench Size",
                body: "6 bench spots for position players",
            },
            Rule {
                title: "Waiver Claims",
                body: "FAAB (Free Agent Acquisition Budget) system with $100 budget per season",
            },
            Rule {
                title: "Trade Deadline",
                body: "Week 11 - No trades allowed after this point",
            },
        ],
    },
    RuleCategory {
        name: "Scoring",
        rules: &[
            Rule {
                title: "Passing",
                body: "1 point per 25 passing yards, 4 points per passing TD, -2 points per interception",
            },
            Rule {
                title: "Rushing",
                body: "1 point per 10 rushing yards, 6 points per rushing TD",
            },
            Rule {
                title: "Receiving",
                body: "1 point per 10 receiving yards, 6 points per receiving TD, 0.5 points per reception (PPR)",
            },
            Rule {
                title: "Kicking",
                body: "1 point per PAT, 3 points for FG 0-39 yards, 4 points for FG 40-49 yards, 5 points for FG 50+ yards",
            },
            Rule {
                title: "Defense",
                body: "Points allowed: 0 pts = 10, 1-6 pts = 7, 7-13 pts = 4, 14-20 pts = 1, 21-27 pts = 0, 28-34 pts = -1, 35+ pts = -4",
            },
        ],
    },
    RuleCategory {
        name: "Draft Rules",
        rules: &[
            Rule {
                title: "Draft Format",
                body: "Snake draft with randomized order",
            },
            Rule {
                title: "Draft Time",
                body: "Annual draft held in late August/early September",
            },
            Rule {
                title: "Pick Time Limit",
                body: "2 minutes per pick during live draft",
            },
        ],
    },
    RuleCategory {
        name: "League Fees & Payouts",
        rules: &[
            Rule {
                title: "Entry Fee",
                body: "$50 per team due before draft",
            },
            Rule {
                title: "Champion Payout",
                body: "$400 (66.7% of total pot)",
            },
            Rule {
                title: "Runner-up Payout",
                body: "$200 (33.3% of total pot)",
            },
        ],
    },
    RuleCategory {
        name: "Conduct & Fair Play",
        rules: &[
            Rule {
                title: "Collusion",
                body: "Strictly prohibited. Any evidence of collusion results in immediate expulsion",
            },
            Rule {
                title: "Inactive Teams",
                body: "Teams must set active lineups. Repeated inactive lineups subject to replacement",
            },
            Rule {
                title: "Trade Review",
                body: "24-hour review period for all trades. Commissioner may veto obviously unfair trades",
            },
        ],
    },
];

pub struct ChampionSeason {
    pub year: u16,
    pub champion: &'static str,
    pub runner_up: &'static str,
    pub third_place: &'static str,
    pub record: &'static str,
}

pub const CHAMPIONS: &[ChampionSeason] = &[
    ChampionSeason {
        year: 2024,
        champion: "Thunder Bolts",
        runner_up: "Championship Chasers",
        third_place: "Victory Vipers",
        record: "12-2",
    },
    ChampionSeason {
        year: 2023,
        champion: "Gridiron Gladiators",
        runner_up: "Victory Vipers",
        third_place: "Dynasty Demons",
        record: "11-3",
    },
    ChampionSeason {
        year: 2022,
        champion: "Dynasty Demons",
        runner_up: "Touchdown Titans",
        third_place: "Fantasy Falcons",
        record: "10-4",
    },
    ChampionSeason {
        year: 2021,
        champion: "Scoreboard Slayers",
        runner_up: "Blitz Brigade",
        third_place: "Thunder Bolts",
        record: "13-1",
    },
    ChampionSeason {
        year: 2020,
        champion: "Fantasy Falcons",
        runner_up: "End Zone Eagles",
        third_place: "Gridiron Gladiators",
        record: "9-5",
    },
];

/// (team, championships, runner-ups, playoff appearances)
pub const TOP_TEAMS: &[(&str, u8, u8, u8)] = &[
    ("Thunder Bolts", 1, 1, 4),
    ("Gridiron Gladiators", 1, 0, 3),
    ("Dynasty Demons", 1, 1, 4),
    ("Scoreboard Slayers", 1, 0, 2),
    ("Fantasy Falcons", 1, 1, 3),
];

/// (team, sackos, sacko appearances)
pub const BOTTOM_TEAMS: &[(&str, u8, u8)] = &[
    ("Grid Iron Giants", 1, 2),
    ("End Zone Eagles", 1, 3),
    ("Pigskin Pirates", 1, 2),
    ("Blitz Brigade", 0, 2),
    ("Championship Chasers", 0, 1),
];

pub struct Punishment {
    pub title: &'static str,
    pub body: &'static str,
}

pub const PUNISHMENTS: &[Punishment] = &[
    Punishment {
        title: "Full Body Wax",
        body: "You must get your entire body waxed head to toe from neck down. This includes a Brazilian (booty hole waxed). You must also shave your head (?)",
    },
    Punishment {
        title: "Waffle House Challenge",
        body: "Enter a Waffle House and remain there for 24 hours. Each pancake/waffle is minus an hour. No silver dollar/bs pancakes - normal sized pancakes. Must check in each hour. If Waffle House closes, time is paused and you must head to another Waffle House. Throwing up doesn't impact anything.",
    },
    Punishment {
        title: "Squeegee/Water Boy",
        body: "Must get a cooler of waters and squeegee tools and stand at an intersection or stoplight. Must be there for 6 hours (or time agreed on by members). If you get paid for squeegee/waters a certain amount (we will vote on amount) your time ends and you can go home.",
    },
];

pub const CURRENT_SACKO: &str = "Dave Voitek - Central Saudi Scammers";

/// (year, member, completed punishment)
pub const PAST_SACKOS: &[(u16, &str, &str)] = &[
    (2024, "Dave", "Beerito 5k"),
    (2023, "Kurt", "Sexy Calendar"),
    (2022, "Mac", "Belly button ring"),
    (2021, "Shilk", "NFL combine"),
    (2020, "Kurt", "IG influencer"),
    (2019, "Trung", "Oreo mile"),
    (2018, "Corazza", "Yeeted from league"),
    (2017, "Stefan", "Sacko not a thing yet"),
];

pub const DRAFT_ROUNDS: u8 = 16;

/// The complete 2025 snake draft: (round, overall pick, team, player, position).
pub const DRAFT_PICKS: &[(u8, u8, &str, &str, &str)] = &[
    (1, 1, "The Silverbacks", "Ja'Marr Chase", "WR"),
    (1, 2, "Sonalika Scorchers", "Saquon Barkley", "RB"),
    (1, 3, "Calamari Ballsrings", "Bijan Robinson", "RB"),
    (1, 4, "NJ Old School", "Jahmyr Gibbs", "RB"),
    (1, 5, "Pink Sock", "Justin Jefferson", "WR"),
    (1, 6, "Jersey Shore Supplements", "Christian McCaffrey", "RB"),
    (1, 7, "The Pancake Football Team", "Ashton Jeanty", "RB"),
    (1, 8, "Central Saudi Scammers", "CeeDee Lamb", "WR"),
    (1, 9, "Maui Mooseknuckles", "Puka Nacua", "WR"),
    (1, 10, "Zweeg", "Nico Collins", "WR"),
    (1, 11, "Maine Course", "Amon-Ra St. Brown", "WR"),
    (1, 12, "Team Gone Jawnson", "A.J. Brown", "WR"),
    (2, 13, "Team Gone Jawnson", "Bucky Irving", "RB"),
    (2, 14, "Maine Course", "Jonathan Taylor", "RB"),
    (2, 15, "Zweeg", "Derrick Henry", "RB"),
    (2, 16, "Maui Mooseknuckles", "Josh Jacobs", "RB"),
    (2, 17, "Central Saudi Scammers", "Drake London", "WR"),
    (2, 18, "The Pancake Football Team", "Josh Allen", "QB"),
    (2, 19, "Jersey Shore Supplements", "De'Von Achane", "RB"),
    (2, 20, "Pink Sock", "Kyren Williams", "RB"),
    (2, 21, "NJ Old School", "James Cook", "RB"),
    (2, 22, "Calamari Ballsrings", "Davante Adams", "WR"),
    (2, 23, "Sonalika Scorchers", "Lamar Jackson", "QB"),
    (2, 24, "The Silverbacks", "Terry McLaurin", "WR"),
    (3, 25, "The Silverbacks", "Omarion Hampton", "RB"),
    (3, 26, "Sonalika Scorchers", "Malik Nabers", "WR"),
    (3, 27, "Calamari Ballsrings", "Tyreek Hill", "WR"),
    (3, 28, "NJ Old School", "DK Metcalf", "WR"),
    (3, 29, "Pink Sock", "Tee Higgins", "WR"),
    (3, 30, "Jersey Shore Supplements", "Trey McBride", "TE"),
    (3, 31, "The Pancake Football Team", "Garrett Wilson", "WR"),
    (3, 32, "Central Saudi Scammers", "Joe Burrow", "QB"),
    (3, 33, "Maui Mooseknuckles", "Marvin Harrison Jr.", "WR"),
    (3, 34, "Zweeg", "Kenneth Walker III", "RB"),
    (3, 35, "Maine Course", "Chuba Hubbard", "RB"),
    (3, 36, "Team Gone Jawnson", "Mike Evans", "WR"),
    (4, 37, "Team Gone Jawnson", "TreVeyon Henderson", "RB"),
    (4, 38, "Maine Course", "Jalen Hurts", "QB"),
    (4, 39, "Zweeg", "Zay Flowers", "WR"),
    (4, 40, "Maui Mooseknuckles", "Breece Hall", "RB"),
    (4, 41, "Central Saudi Scammers", "Alvin Kamara", "RB"),
    (4, 42, "The Pancake Football Team", "DJ Moore", "WR"),
    (4, 43, "Jersey Shore Supplements", "Tetairoa McMillan", "WR"),
    (4, 44, "Pink Sock", "James Conner", "RB"),
    (4, 45, "NJ Old School", "DeVonta Smith", "WR"),
    (4, 46, "Calamari Ballsrings", "Baker Mayfield", "QB"),
    (4, 47, "Sonalika Scorchers", "Courtland Sutton", "WR"),
    (4, 48, "The Silverbacks", "D'Andre Swift", "RB"),
    (5, 49, "The Silverbacks", "Patrick Mahomes", "QB"),
    (5, 50, "Sonalika Scorchers", "Calvin Ridley", "WR"),
    (5, 51, "Calamari Ballsrings", "Jameson Williams", "WR"),
    (5, 52, "NJ Old School", "Xavier Worthy", "WR"),
    (5, 53, "Pink Sock", "George Kittle", "TE"),
    (5, 54, "Jersey Shore Supplements", "Tony Pollard", "RB"),
    (5, 55, "The Pancake Football Team", "Sam LaPorta", "TE"),
    (5, 56, "Central Saudi Scammers", "RJ Harvey", "RB"),
    (5, 57, "Maui Mooseknuckles", "Travis Kelce", "TE"),
    (5, 58, "Zweeg", "Travis Hunter", "WR"),
    (5, 59, "Maine Course", "Jaylen Waddle", "WR"),
    (5, 60, "Team Gone Jawnson", "Jerry Jeudy", "WR"),
    (6, 61, "Team Gone Jawnson", "Tyler Warren", "TE"),
    (6, 62, "Maine Course", "Evan Engram", "TE"),
    (6, 63, "Zweeg", "David Montgomery", "RB"),
    (6, 64, "Maui Mooseknuckles", "George Pickens", "WR"),
    (6, 65, "Central Saudi Scammers", "Jaxon Smith-Njigba", "WR"),
    (6, 66, "The Pancake Football Team", "Jacory Croskey-Merritt", "RB"),
    (6, 67, "Jersey Shore Supplements", "Rashee Rice", "WR"),
    (6, 68, "Pink Sock", "Rome Odunze", "WR"),
    (6, 69, "NJ Old School", "Aaron Jones Sr.", "RB"),
    (6, 70, "Calamari Ballsrings", "Isiah Pacheco", "RB"),
    (6, 71, "Sonalika Scorchers", "Tyrone Tracy Jr.", "RB"),
    (6, 72, "The Silverbacks", "Ricky Pearsall", "WR"),
    (7, 73, "The Silverbacks", "Emeka Egbuka", "WR"),
    (7, 74, "Sonalika Scorchers", "T.J. Hockenson", "TE"),
    (7, 75, "Calamari Ballsrings", "Stefon Diggs", "WR"),
    (7, 76, "NJ Old School", "Chris Olave", "WR"),
    (7, 77, "Pink Sock", "Jaylen Warren", "RB"),
    (7, 78, "Jersey Shore Supplements", "Matthew Golden", "WR"),
    (7, 79, "The Pancake Football Team", "Jakobi Meyers", "WR"),
    (7, 80, "Central Saudi Scammers", "Mark Andrews", "TE"),
    (7, 81, "Maui Mooseknuckles", "David Njoku", "TE"),
    (7, 82, "Zweeg", "J.K. Dobbins", "RB"),
    (7, 83, "Maine Course", "Ladd McConkey", "WR"),
    (7, 84, "Team Gone Jawnson", "Jordan Mason", "RB"),
    (8, 85, "Team Gone Jawnson", "Bo Nix", "QB"),
    (8, 86, "Maine Course", "Deebo Samuel", "WR"),
    (8, 87, "Zweeg", "Brian Thomas Jr.", "WR"),
    (8, 88, "Maui Mooseknuckles", "Cooper Kupp", "WR"),
    (8, 89, "Central Saudi Scammers", "Javonte Williams", "RB"),
    (8, 90, "The Pancake Football Team", "Kaleb Johnson", "RB"),
    (8, 91, "Jersey Shore Supplements", "Michael Pittman Jr.", "WR"),
    (8, 92, "Pink Sock", "Cam Skattebo", "RB"),
    (8, 93, "NJ Old School", "Travis Etienne Jr.", "RB"),
    (8, 94, "Calamari Ballsrings", "Brock Bowers", "TE"),
    (8, 95, "Sonalika Scorchers", "Quinshon Judkins", "RB"),
    (8, 96, "The Silverbacks", "Zach Charbonnet", "RB"),
    (9, 97, "The Silverbacks", "Kyler Murray", "QB"),
    (9, 98, "Sonalika Scorchers", "Khalil Shakir", "WR"),
    (9, 99, "Calamari Ballsrings", "Austin Ekeler", "RB"),
    (9, 100, "NJ Old School", "Chris Godwin Jr.", "WR"),
    (9, 101, "Pink Sock", "Keon Coleman", "WR"),
    (9, 102, "Jersey Shore Supplements", "Jayden Daniels", "QB"),
    (9, 103, "The Pancake Football Team", "Jauan Jennings", "WR"),
    (9, 104, "Central Saudi Scammers", "Rhamondre Stevenson", "RB"),
    (9, 105, "Maui Mooseknuckles", "Jerome Ford", "RB"),
    (9, 106, "Zweeg", "Tucker Kraft", "TE"),
    (9, 107, "Maine Course", "Jaydon Blue", "RB"),
    (9, 108, "Team Gone Jawnson", "Chase Brown", "RB"),
    (10, 109, "Team Gone Jawnson", "Darnell Mooney", "WR"),
    (10, 110, "Maine Course", "Kyle Pitts Sr.", "TE"),
    (10, 111, "Zweeg", "Rashod Bateman", "WR"),
    (10, 112, "Maui Mooseknuckles", "Caleb Williams", "QB"),
    (10, 113, "Central Saudi Scammers", "Jordan Addison", "WR"),
    (10, 114, "The Pancake Football Team", "Trey Benson", "RB"),
    (10, 115, "Jersey Shore Supplements", "Keenan Allen", "WR"),
    (10, 116, "Pink Sock", "Brock Purdy", "QB"),
    (10, 117, "NJ Old School", "Justin Herbert", "QB"),
    (10, 118, "Calamari Ballsrings", "Jayden Reed", "WR"),
    (10, 119, "Sonalika Scorchers", "Nick Chubb", "RB"),
    (10, 120, "The Silverbacks", "Colston Loveland", "TE"),
    (11, 121, "The Silverbacks", "Tank Bigsby", "RB"),
    (11, 122, "Sonalika Scorchers", "Xavier Legette", "WR"),
    (11, 123, "Calamari Ballsrings", "Jared Goff", "QB"),
    (11, 124, "NJ Old School", "Jordan Love", "QB"),
    (11, 125, "Pink Sock", "Drake Maye", "QB"),
    (11, 126, "Jersey Shore Supplements", "Bhayshul Tuten", "RB"),
    (11, 127, "The Pancake Football Team", "J.J. McCarthy", "QB"),
    (11, 128, "Central Saudi Scammers", "C.J. Stroud", "QB"),
    (11, 129, "Maui Mooseknuckles", "Hollywood Brown", "WR"),
    (11, 130, "Zweeg", "Dak Prescott", "QB"),
    (11, 131, "Maine Course", "Broncos D/ST", "DEF"),
    (11, 132, "Team Gone Jawnson", "Braelon Allen", "RB"),
    (12, 133, "Team Gone Jawnson", "Steelers D/ST", "DEF"),
    (12, 134, "Maine Course", "Brian Robinson Jr.", "RB"),
    (12, 135, "Zweeg", "Jake Ferguson", "TE"),
    (12, 136, "Maui Mooseknuckles", "Joe Mixon", "RB"),
    (12, 137, "Central Saudi Scammers", "Dallas Goedert", "TE"),
    (12, 138, "The Pancake Football Team", "Cedric Tillman", "WR"),
    (12, 139, "Jersey Shore Supplements", "Justin Fields", "QB"),
    (12, 140, "Pink Sock", "Najee Harris", "RB"),
    (12, 141, "NJ Old School", "Dalton Kincaid", "TE"),
    (12, 142, "Calamari Ballsrings", "Zach Ertz", "TE"),
    (12, 143, "Sonalika Scorchers", "Rashid Shaheed", "WR"),
    (12, 144, "The Silverbacks", "Jayden Higgins", "WR"),
    (13, 145, "The Silverbacks", "Wan'Dale Robinson", "WR"),
    (13, 146, "Sonalika Scorchers", "Texans D/ST", "DEF"),
    (13, 147, "Calamari Ballsrings", "Rachaad White", "RB"),
    (13, 148, "NJ Old School", "Brandon Aiyuk", "WR"),
    (13, 149, "Pink Sock", "Josh Downs", "WR"),
    (13, 150, "Jersey Shore Supplements", "Ollie Gordon II", "RB"),
    (13, 151, "The Pancake Football Team", "Ray Davis", "RB"),
    (13, 152, "Central Saudi Scammers", "Ravens D/ST", "DEF"),
    (13, 153, "Maui Mooseknuckles", "Eagles D/ST", "DEF"),
    (13, 154, "Zweeg", "Kyle Monangai", "RB"),
    (13, 155, "Maine Course", "Michael Penix Jr.", "QB"),
    (13, 156, "Team Gone Jawnson", "Adam Thielen", "WR"),
    (14, 157, "Team Gone Jawnson", "Brandon Aubrey", "K"),
    (14, 158, "Maine Course", "Marvin Mims Jr.", "WR"),
    (14, 159, "Zweeg", "Packers D/ST", "DEF"),
    (14, 160, "Maui Mooseknuckles", "Kendre Miller", "RB"),
    (14, 161, "Central Saudi Scammers", "Will Shipley", "RB"),
    (14, 162, "The Pancake Football Team", "Vikings D/ST", "DEF"),
    (14, 163, "Jersey Shore Supplements", "Dylan Sampson", "RB"),
    (14, 164, "Pink Sock", "Tyler Allgeier", "RB"),
    (14, 165, "NJ Old School", "Amari Cooper", "WR"),
    (14, 166, "Calamari Ballsrings", "Seahawks D/ST", "DEF"),
    (14, 167, "Sonalika Scorchers", "Chris Boswell", "K"),
    (14, 168, "The Silverbacks", "Tyjae Spears", "RB"),
    (15, 169, "The Silverbacks", "Chase McLaughlin", "K"),
    (15, 170, "Sonalika Scorchers", "Elic Ayomanor", "WR"),
    (15, 171, "Calamari Ballsrings", "Cameron Dicker", "K"),
    (15, 172, "NJ Old School", "Giants D/ST", "DEF"),
    (15, 173, "Pink Sock", "Jake Elliott", "K"),
    (15, 174, "Jersey Shore Supplements", "Jake Bates", "K"),
    (15, 175, "The Pancake Football Team", "Woody Marks", "RB"),
    (15, 176, "Central Saudi Scammers", "Luther Burden III", "WR"),
    (15, 177, "Maui Mooseknuckles", "Cam Ward", "QB"),
    (15, 178, "Zweeg", "Trevor Lawrence", "QB"),
    (15, 179, "Maine Course", "Matt Gay", "K"),
    (15, 180, "Team Gone Jawnson", "Dameon Pierce", "RB"),
    (16, 181, "Team Gone Jawnson", "Cade Otton", "TE"),
    (16, 182, "Maine Course", "Blake Corum", "RB"),
    (16, 183, "Zweeg", "Tyler Loop", "K"),
    (16, 184, "Maui Mooseknuckles", "Tyler Bass", "K"),
    (16, 185, "Central Saudi Scammers", "Harrison Butker", "K"),
    (16, 186, "The Pancake Football Team", "Younghoe Koo", "K"),
    (16, 187, "Jersey Shore Supplements", "Lions D/ST", "DEF"),
    (16, 188, "Pink Sock", "Patriots D/ST", "DEF"),
    (16, 189, "NJ Old School", "Cam Little", "K"),
    (16, 190, "Calamari Ballsrings", "Bills D/ST", "DEF"),
    (16, 191, "Sonalika Scorchers", "Isaac TeSlaa", "WR"),
    (16, 192, "The Silverbacks", "Buccaneers D/ST", "DEF"),
];

pub fn round_picks(round: u8) -> impl Iterator<Item = &'static (u8, u8, &'static str, &'static str, &'static str)> {
    DRAFT_PICKS.iter().filter(move |(r, ..)| *r == round)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_board_is_a_full_snake_draft() {
        assert_eq!(DRAFT_PICKS.len(), 12 * DRAFT_ROUNDS as usize);
        for round in 1..=DRAFT_ROUNDS {
            assert_eq!(round_picks(round).count(), 12, "round {round} is short");
        }
        // Overall pick numbers are contiguous.
        for (idx, (_, pick, ..)) in DRAFT_PICKS.iter().enumerate() {
            assert_eq!(*pick as usize, idx + 1);
        }
    }

    #[test]
    fn rules_catalogue_is_populated() {
        assert_eq!(RULES.len(), 5);
        assert!(RULES.iter().all(|c| !c.rules.is_empty()));
    }
}
