use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    MisplacedTiles,
    Manhattan,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Bfs,
    Iddfs,
    AStar(Heuristic),
}

impl Method {
    /// All methods in the order they're reported.
    pub const ALL: [Method; 4] = [
        Method::Bfs,
        Method::Iddfs,
        Method::AStar(Heuristic::MisplacedTiles),
        Method::AStar(Heuristic::Manhattan),
    ];

    /// Parses every name, stops at the first unknown one.
    pub fn parse_all<'a, I>(names: I) -> Result<Vec<Method>, ConfigErr>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().map(str::parse).collect()
    }

    pub fn description(self) -> &'static str {
        match self {
            Method::Bfs => "Uninformed breadth-first search",
            Method::Iddfs => "Iterative deepening depth-first search",
            Method::AStar(Heuristic::MisplacedTiles) => {
                "A* search using number of misplaced tiles heuristic"
            }
            Method::AStar(Heuristic::Manhattan) => {
                "A* search using sum of manhattan distances heuristic"
            }
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Bfs => write!(f, "bfs"),
            Method::Iddfs => write!(f, "iddfs"),
            Method::AStar(Heuristic::MisplacedTiles) => write!(f, "a-star-misplaced"),
            Method::AStar(Heuristic::Manhattan) => write!(f, "a-star-manhattan"),
        }
    }
}

impl FromStr for Method {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .iter()
            .cloned()
            .find(|method| method.to_string() == s)
            .ok_or_else(|| ConfigErr::UnknownMethod(s.to_owned()))
    }
}

/// Where the empty cell ends up in the solved board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GoalKind {
    EmptyFirst,
    EmptyLast,
}

impl GoalKind {
    pub const ALL: [GoalKind; 2] = [GoalKind::EmptyFirst, GoalKind::EmptyLast];
}

impl Display for GoalKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            GoalKind::EmptyFirst => write!(f, "empty-first"),
            GoalKind::EmptyLast => write!(f, "empty-last"),
        }
    }
}

impl FromStr for GoalKind {
    type Err = ConfigErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty-first" => Ok(GoalKind::EmptyFirst),
            "empty-last" => Ok(GoalKind::EmptyLast),
            _ => Err(ConfigErr::UnknownGoal(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    UnknownMethod(String),
    UnknownGoal(String),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::UnknownMethod(name) => write!(f, "Unknown method: {}", name),
            ConfigErr::UnknownGoal(name) => write!(f, "Unknown goal: {}", name),
        }
    }
}

impl Error for ConfigErr {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_names() {
        for &method in Method::ALL.iter() {
            assert_eq!(method.to_string().parse::<Method>(), Ok(method));
        }
        assert_eq!(
            "a-star-manhattan".parse::<Method>(),
            Ok(Method::AStar(Heuristic::Manhattan))
        );
        assert_eq!(
            "dfs".parse::<Method>(),
            Err(ConfigErr::UnknownMethod("dfs".to_owned()))
        );
    }

    #[test]
    fn parsing_method_lists() {
        assert_eq!(
            Method::parse_all(vec!["iddfs", "bfs"]),
            Ok(vec![Method::Iddfs, Method::Bfs])
        );
        assert_eq!(Method::parse_all(Vec::<&str>::new()), Ok(Vec::new()));
        // an unknown name fails the whole list instead of being skipped
        assert_eq!(
            Method::parse_all(vec!["bfs", "dfs", "iddfs"]),
            Err(ConfigErr::UnknownMethod("dfs".to_owned()))
        );
    }

    #[test]
    fn goal_names() {
        for &kind in GoalKind::ALL.iter() {
            assert_eq!(kind.to_string().parse::<GoalKind>(), Ok(kind));
        }
        assert_eq!(
            "middle".parse::<GoalKind>().unwrap_err().to_string(),
            "Unknown goal: middle"
        );
    }
}
