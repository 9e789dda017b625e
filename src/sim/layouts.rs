//! Built-in level pool
//!
//! Three 28x31 layouts. Each has at least one tunnel row whose edge columns
//! are open, so agents leaving one side re-enter on the other.

/// First layout: the classic arrangement
pub const MAZE_CLASSIC: [&str; 31] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##    1234  ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "      .   ########   .      ",
    "######.## ######## ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##........P.......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

/// Second layout: side pockets and a split tunnel
pub const MAZE_POCKETS: [&str; 31] = [
    "############################",
    "#o...........##...........o#",
    "#.####.#####.##.#####.####.#",
    "#.#  #.#   #.##.#   #.#  #.#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "####.#.#####.##.#####.#.####",
    "   #.#.##### ## #####.#.#   ",
    "####.#.##### ## #####.#.####",
    "     ..##    1234  ##..     ",
    "####.#.## ######## ##.#.####",
    "   #.#.## ######## ##.#.#   ",
    "   #...   ########   ...#   ",
    "####.#.## ######## ##.#.####",
    "     #.## ######## ##.#     ",
    "######.##          ##.######",
    "#.........########.........#",
    "#.####.##.########.##.####.#",
    "#o...#.......##.......#...o#",
    "####.#.#####.##.#####.#.####",
    "####.#.#####.##.#####.#.####",
    "#.......##....P...##.......#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

/// Third layout: raised tunnel and open lower field
pub const MAZE_FIELD: [&str; 31] = [
    "############################",
    "#..........................#",
    "#.##.####.########.####.##.#",
    "#o##.####.########.####.##o#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##....##....##.####.#",
    "#......#####.##.#####......#",
    "######.#####.##.#####.######",
    "     #.##          ##.#     ",
    "     #.## ###  ### ##.#     ",
    "     #.## #  1234# ##.#     ",
    "######.## ######## ##.######",
    "      .   ########   .      ",
    "######.## ######## ##.######",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......P........##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.####.####..##..####.####.#",
    "#.####.####.####.####.####.#",
    "#......##..........##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];

/// Ordered pool, selected by `level mod 3`
pub const CLASSIC_POOL: [&[&str]; 3] = [&MAZE_CLASSIC, &MAZE_POCKETS, &MAZE_FIELD];
