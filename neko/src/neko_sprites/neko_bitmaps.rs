//! Neko frames, `#` is a foreground pixel.

use super::{sprite_bits, SpriteBits};

pub(crate) static AWAKE: SpriteBits = sprite_bits([
    "................................",
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........#.##.....##.#.........",
    "..........#...#...#...#.........",
    "..........#.#########.#.........",
    "..........###.......###.........",
    "..........#..#.....#..#.........",
    ".........##.#.#...#.#.##........",
    ".........#.#.#.#.#.#.#.#........",
    "......####..#.#...#.#..####.....",
    "........####.#..#..#.####.......",
    ".........###...###...###........",
    "......###.#...........#.###.....",
    "...........##.......##..........",
    "............#########...........",
    "............##.....##...........",
    "...........##.......##..........",
    "..........##.........##.........",
    "..........#...........#.........",
    ".........#.............#........",
    ".........#.............#........",
    ".........#.............#.....#..",
    ".........#.............#.....#..",
    ".........#.............#....#...",
    "..........#...........#....#....",
    "..........##.........##..###....",
    "...........##.......#####.......",
    "...........#####.#####..........",
    "...........#..#####..#..........",
    "...........#####.#####..........",
]);

pub(crate) static STILL: SpriteBits = sprite_bits([
    "................................",
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........#.##.....##.#.........",
    "..........#...#...#...#.........",
    "..........#.#########.#.........",
    "..........###.......###.........",
    "..........#...........#.........",
    ".........##...........##........",
    ".........#...#.....#...#........",
    "......####...#.....#...####.....",
    "........####....#....####.......",
    ".........###...###...###........",
    "......###.#...........#.###.....",
    "...........##.......##..........",
    "............#########...........",
    "............##.....##...........",
    "...........##.......##..........",
    "..........##.........##.........",
    "..........#...........#.........",
    ".........#.............#........",
    ".........#.............#........",
    ".........#.............#.....#..",
    ".........#.............#.....#..",
    ".........#.............#....#...",
    "..........#...........#....#....",
    "..........##.........##..###....",
    "...........##.......#####.......",
    "...........#####.#####..........",
    "...........#..#####..#..........",
    "...........#####.#####..........",
]);

pub(crate) static YAWN: SpriteBits = sprite_bits([
    "................................",
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........#.##.....##.#.........",
    "..........#...#...#...#.........",
    "..........#.#########.#.........",
    "..........###.......###.........",
    "..........#...........#.........",
    ".........##...........##........",
    ".........#..###...###..#........",
    "......####.............####.....",
    "........####....#....####.......",
    ".........###...###...###........",
    "......###.#...#####...#.###.....",
    "...........##..###..##..........",
    "............#########...........",
    "............##.....##...........",
    "...........##.......##..........",
    "..........##.........##.........",
    "..........#...........#.........",
    ".........#.............#........",
    ".........#.............#........",
    ".........#.............#.....#..",
    ".........#.............#.....#..",
    ".........#.............#....#...",
    "..........#...........#....#....",
    "..........##.........##..###....",
    "...........##.......#####.......",
    "...........#####.#####..........",
    "...........#..#####..#..........",
    "...........#####.#####..........",
]);

pub(crate) static LICK: SpriteBits = sprite_bits([
    "................................",
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........#.##.....##.#.........",
    "..........#...#...#...#.........",
    "..........#.#########.#.........",
    "..........###.......###.........",
    "..........#...........#.........",
    ".........##...........##........",
    ".........#..###...###..#........",
    "......####.............####.....",
    "........####....#....####.......",
    ".........###....#....###........",
    "......###.#.....#..#..#.###.....",
    "...........##...######..........",
    "............######...#..........",
    "............##...#...#..........",
    "...........##....#...#..........",
    "..........##.....######.........",
    "..........#.......##..#.........",
    ".........#........#....#........",
    ".........#.......##....#........",
    ".........#.......#.....#.....#..",
    ".........#.......#.....#.....#..",
    ".........#.............#....#...",
    "..........#...........#....#....",
    "..........##.........##..###....",
    "...........##.......#####.......",
    "...........#####.#####..........",
    "...........#..#####..#..........",
    "...........#####.#####..........",
]);

pub(crate) static ITCH1: SpriteBits = sprite_bits([
    "................................",
    "..........#...........#.........",
    "..........##.........##.......#.",
    "..........#.#.......#.#......#..",
    "..........#.##.....##.#..###....",
    "..........#...#...#...#.##.##...",
    "..........#.#########.#.#...#...",
    "..........###.......###.##.##...",
    "..........#...........#..###....",
    ".........##...........##..##....",
    ".........#..###...###..#..##....",
    "......####.............####.....",
    "........####....#....######.....",
    ".........###...###...###.##.....",
    "......###.#...........#.###.....",
    "...........##.......##...#......",
    "............#########...##......",
    "............##.....##...##......",
    "...........##.......##..##......",
    "..........##.........####.......",
    "..........#...........###.......",
    ".........#.............##.......",
    ".........#.............#........",
    ".........#............##.....#..",
    ".........#............##.....#..",
    ".........#............##....#...",
    "..........#...........#....#....",
    "..........##.........##..###....",
    "...........##.......#####.......",
    "...........#####.#####..........",
    "...........#..#####..#..........",
    "...........#####.#####..........",
]);

pub(crate) static ITCH2: SpriteBits = sprite_bits([
    "................................",
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........#.##.....##.#.........",
    "..........#...#...#...#.......#.",
    "..........#.#########.#......##.",
    "..........###.......###..###....",
    "..........#...........#.##.##...",
    ".........##...........###...#...",
    ".........#..###...###..###.##...",
    "......####.............#####.###",
    "........####....#....####.##....",
    ".........###...###...###..##....",
    "......###.#...........#.###.....",
    "...........##.......##...##.....",
    "............#########....##.....",
    "............##.....##....#......",
    "...........##.......##..##......",
    "..........##.........##.##......",
    "..........#...........###.......",
    ".........#.............##.......",
    ".........#.............##.......",
    ".........#.............#.....#..",
    ".........#............##.....#..",
    ".........#............##....#...",
    "..........#...........#....#....",
    "..........##.........##..###....",
    "...........##.......#####.......",
    "...........#####.#####..........",
    "...........#..#####..#..........",
    "...........#####.#####..........",
]);

pub(crate) static SLEEP1: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "......................#####.....",
    ".........................#......",
    "........................#.......",
    ".......................#........",
    "......................#####.....",
    ".....#.......#..................",
    ".....##......#..................",
    ".....#.#....###.................",
    "......################..........",
    ".....##.......##.....####.......",
    "....##.........##.......###.....",
    "....#...........#.........##....",
    "....#..###..###.#..........##...",
    "....#...........#...........#...",
    "....##.........##...........#...",
    "....###.......##............#...",
    "....###########............##...",
    ".....##.................#.##....",
    "......###...............###.....",
    "........####.###############....",
    "...........###########..........",
    "................................",
]);

pub(crate) static SLEEP2: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "...........................####.",
    "............................##..",
    "............................#...",
    "...........................####.",
    "................................",
    "................................",
    "................................",
    "......................#####.....",
    ".........................#......",
    "........................#.......",
    ".......................#........",
    "......................#####.....",
    ".....#.......#..................",
    ".....##......#..................",
    ".....#.#....###.................",
    "......################..........",
    ".....##.......##.....####.......",
    "....##.........##.......###.....",
    "....#...........#.........##....",
    "....#..###..###.#..........##...",
    "....#...........#...........#...",
    "....##.........##...........#...",
    "....###.......##............#...",
    "....###########............##...",
    ".....##.................#.##....",
    "......###...............###.....",
    "........####.###############....",
    "...........###########..........",
    "................................",
]);

pub(crate) static UP1: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........##.#######.##.........",
    "...........###.....###..........",
    "...........#.........#..........",
    "..........##.........##.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........##.........##.........",
    "...........#.........#..........",
    "........#...##.....##...........",
    "........#...#########...........",
    ".........#..#.......#...........",
    ".........###.........#..........",
    "..........##.........#..........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "...........#.........##.........",
    "...........#.........##.........",
    "............#.......#.#.........",
    "............###...###..#........",
    "..............#####....#........",
    "................#...............",
    "................#...............",
    "................#...............",
]);

pub(crate) static UP2: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........##.#######.##.........",
    "...........###.....###..........",
    "...........#.........#..........",
    "..........##.........##.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........##.........##.........",
    "...........#.........#..........",
    "............##.....##...#.......",
    "............#########...#.......",
    "............#.......#..#........",
    "...........#.........###........",
    "...........#.........##.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........##.........#..........",
    "..........##.........#..........",
    "..........#.#.......#...........",
    ".........#..###...###...........",
    ".........#....#####.............",
    ".................#..............",
    "..................#.............",
    "..................#.............",
]);

pub(crate) static DOWN1: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........#..#.....#..#.........",
    "..........#...#.#.#...#.........",
    "..........#.#########.#.........",
    "..........###.......###.........",
    "..........#...........#.........",
    ".........##...........##........",
    ".........#...#.....#...#........",
    "......####...#.....#...####.....",
    ".........###....#....###........",
    "........####...###...####.......",
    "......###.#...........#.###.....",
    "...........##.......##..........",
    "............#########...........",
    "...........##...#...##..........",
    "...........#.........#..........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "...........#.........#..........",
    "...........##.......##..........",
    "...........###.....###..........",
    "...........#..#####..#..........",
    "..........#.....................",
    "..........#.....................",
    "..........#.....................",
]);

pub(crate) static DOWN2: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........#..#.....#..#.........",
    "..........#...#.#.#...#.........",
    "..........#.#########.#.........",
    "..........###.......###.........",
    "..........#...........#.........",
    ".........##...........##........",
    ".........#...#.....#...#........",
    "......####...#.....#...####.....",
    ".........###....#....###........",
    "........####...###...####.......",
    "......###.#...........#.###.....",
    "...........##.......##..........",
    "............#########...........",
    "...........##...#...##..........",
    "...........#.........#..........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "...........#.........#..........",
    "...........##.......##..........",
    "...........###.....###..........",
    "...........#..#####..#..........",
    "......................#.........",
    "......................#.........",
    "......................#.........",
]);

pub(crate) static LEFT1: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "....#.....#.....................",
    "....#....##.....................",
    "....##..###.....................",
    "...##.###.#.....................",
    "...########.................#...",
    "...##.....##................##..",
    "..##.......##................#..",
    "..#..#......#................#..",
    "..#..#......#................#..",
    "###.........##########......#...",
    "..###......###.......###...##...",
    "...##.....##............##.#....",
    "....#######..............##.....",
    ".......##.................#.....",
    "........#.................#.....",
    "........#.................#.....",
    ".........#...............#......",
    ".........##.............##......",
    "...........###.......###........",
    "..........#.##########.##.......",
    ".........#..#........#...#......",
    "........#..#..........#..#......",
    ".......#..#............#..##....",
    "......#...#............#....#...",
    ".....#...#..............#.......",
    "................................",
    "................................",
]);

pub(crate) static LEFT2: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "....#.....#.....................",
    "....#....##.....................",
    "....##..###.....................",
    "...##.###.#.....................",
    "...########.................#...",
    "...##.....##................##..",
    "..##.......##................#..",
    "..#..#......#................#..",
    "..#..#......#................#..",
    "###.........##########......#...",
    "..###......###.......###...##...",
    "...##.....##............##.#....",
    "....#######..............##.....",
    ".......##.................#.....",
    "........#.................#.....",
    "........#.................#.....",
    ".........#...............#......",
    ".........##.............##......",
    "...........###.......###........",
    "...........#.##########.........",
    "............#.#....#.#..........",
    "............#.#...####..........",
    "............#.#...#.#...........",
    ".............#.#.#.#............",
    ".............#.#.#.#............",
    "................................",
    "................................",
]);

pub(crate) static RIGHT1: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    ".....................#.....#....",
    ".....................##....#....",
    ".....................###..##....",
    ".....................#.###.##...",
    "...#.................########...",
    "..##................##.....##...",
    "..#................##.......##..",
    "..#................#......#..#..",
    "..#................#......#..#..",
    "...#......##########.........###",
    "...##...###.......###......###..",
    "....#.##............##.....##...",
    ".....##..............#######....",
    ".....#.................##.......",
    ".....#.................#........",
    ".....#.................#........",
    "......#...............#.........",
    "......##.............##.........",
    "........###.......###...........",
    ".......##.##########.#..........",
    "......#...#........#..#.........",
    "......#..#..........#..#........",
    "....##..#............#..#.......",
    "...#....#............#...#......",
    ".......#..............#...#.....",
    "................................",
    "................................",
]);

pub(crate) static RIGHT2: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    ".....................#.....#....",
    ".....................##....#....",
    ".....................###..##....",
    ".....................#.###.##...",
    "...#.................########...",
    "..##................##.....##...",
    "..#................##.......##..",
    "..#................#......#..#..",
    "..#................#......#..#..",
    "...#......##########.........###",
    "...##...###.......###......###..",
    "....#.##............##.....##...",
    ".....##..............#######....",
    ".....#.................##.......",
    ".....#.................#........",
    ".....#.................#........",
    "......#...............#.........",
    "......##.............##.........",
    "........###.......###...........",
    ".........##########.#...........",
    "..........#.#....#.#............",
    "..........####...#.#............",
    "...........#.#...#.#............",
    "............#.#.#.#.............",
    "............#.#.#.#.............",
    "................................",
    "................................",
]);

pub(crate) static UP_LEFT1: SpriteBits = sprite_bits([
    "................................",
    "....#.....#.....................",
    "....#....##.....................",
    "....##..###.....................",
    "...##.###.#.....................",
    "...########.....................",
    "...##.....##....................",
    "..##.......##...................",
    "..#..#......#...................",
    "..#..#......#...............#...",
    "###.........#...............##..",
    "..###......##................#..",
    "...##.....##.................#..",
    "....#######..................#..",
    ".......#.....#########......#...",
    "...........###.......###...##...",
    ".........##.............##.#....",
    ".........#...............##.....",
    "........#.................#.....",
    "........#.................#.....",
    "........#.................#.....",
    ".........#...............#......",
    ".........##.............##......",
    "...........###.......###........",
    "..........#.##########.##.......",
    ".........#..#........#...#......",
    "........#..#..........#..#......",
    ".......#..#............#..##....",
    "......#...#............#....#...",
    ".....#...#..............#.......",
    "................................",
    "................................",
]);

pub(crate) static UP_LEFT2: SpriteBits = sprite_bits([
    "................................",
    "....#.....#.....................",
    "....#....##.....................",
    "....##..###.....................",
    "...##.###.#.....................",
    "...########.....................",
    "...##.....##....................",
    "..##.......##...................",
    "..#..#......#...................",
    "..#..#......#...............#...",
    "###.........#...............##..",
    "..###......##................#..",
    "...##.....##.................#..",
    "....#######..................#..",
    ".......#.....#########......#...",
    "...........###.......###...##...",
    ".........##.............##.#....",
    ".........#...............##.....",
    "........#.................#.....",
    "........#.................#.....",
    "........#.................#.....",
    ".........#...............#......",
    ".........##.............##......",
    "...........###.......###........",
    "...........#.##########.........",
    "............#.#....#.#..........",
    "............#.#...####..........",
    "............#.#...#.#...........",
    ".............#.#.#.#............",
    ".............#.#.#.#............",
    "................................",
    "................................",
]);

pub(crate) static UP_RIGHT1: SpriteBits = sprite_bits([
    "................................",
    ".....................#.....#....",
    ".....................##....#....",
    ".....................###..##....",
    ".....................#.###.##...",
    ".....................########...",
    "....................##.....##...",
    "...................##.......##..",
    "...................#......#..#..",
    "...#...............#......#..#..",
    "..##...............#.........###",
    "..#................##......###..",
    "..#.................##.....##...",
    "..#..................#######....",
    "...#......#########.....#.......",
    "...##...###.......###...........",
    "....#.##.............##.........",
    ".....##...............#.........",
    ".....#.................#........",
    ".....#.................#........",
    ".....#.................#........",
    "......#...............#.........",
    "......##.............##.........",
    "........###.......###...........",
    ".......##.##########.#..........",
    "......#...#........#..#.........",
    "......#..#..........#..#........",
    "....##..#............#..#.......",
    "...#....#............#...#......",
    ".......#..............#...#.....",
    "................................",
    "................................",
]);

pub(crate) static UP_RIGHT2: SpriteBits = sprite_bits([
    "................................",
    ".....................#.....#....",
    ".....................##....#....",
    ".....................###..##....",
    ".....................#.###.##...",
    ".....................########...",
    "....................##.....##...",
    "...................##.......##..",
    "...................#......#..#..",
    "...#...............#......#..#..",
    "..##...............#.........###",
    "..#................##......###..",
    "..#.................##.....##...",
    "..#..................#######....",
    "...#......#########.....#.......",
    "...##...###.......###...........",
    "....#.##.............##.........",
    ".....##...............#.........",
    ".....#.................#........",
    ".....#.................#........",
    ".....#.................#........",
    "......#...............#.........",
    "......##.............##.........",
    "........###.......###...........",
    ".........##########.#...........",
    "..........#.#....#.#............",
    "..........####...#.#............",
    "...........#.#...#.#............",
    "............#.#.#.#.............",
    "............#.#.#.#.............",
    "................................",
    "................................",
]);

pub(crate) static DOWN_LEFT1: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "....#.....#.....................",
    "....#....##.................#...",
    "....##..###.................##..",
    "...##.#.#.#..................#..",
    "...########..................#..",
    "...##.....##.................#..",
    "..##.......###########......#...",
    "..#..#......##.......###...##...",
    "..#..#......#...........##.#....",
    "###.........#............##.....",
    "..###......##.............#.....",
    "...##.....##..............#.....",
    "....#######...............#.....",
    ".........#...............#......",
    ".........##.............##......",
    "...........###.......###........",
    "..........#.##########.##.......",
    ".........#..#........#...#......",
    "........#..#..........#..#......",
    ".......#..#............#..##....",
    "......#...#............#....#...",
    ".....#...#..............#.......",
    "................................",
    "................................",
]);

pub(crate) static DOWN_LEFT2: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "....#.....#.....................",
    "....#....##.................#...",
    "....##..###.................##..",
    "...##.#.#.#..................#..",
    "...########..................#..",
    "...##.....##.................#..",
    "..##.......###########......#...",
    "..#..#......##.......###...##...",
    "..#..#......#...........##.#....",
    "###.........#............##.....",
    "..###......##.............#.....",
    "...##.....##..............#.....",
    "....#######...............#.....",
    ".........#...............#......",
    ".........##.............##......",
    "...........###.......###........",
    "...........#.##########.........",
    "............#.#....#.#..........",
    "............#.#...####..........",
    "............#.#...#.#...........",
    ".............#.#.#.#............",
    ".............#.#.#.#............",
    "................................",
    "................................",
]);

pub(crate) static DOWN_RIGHT1: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    ".....................#.....#....",
    "...#.................##....#....",
    "..##.................###..##....",
    "..#..................#.#.#.##...",
    "..#..................########...",
    "..#.................##.....##...",
    "...#......###########.......##..",
    "...##...###.......##......#..#..",
    "....#.##...........#......#..#..",
    ".....##............#.........###",
    ".....#.............##......###..",
    ".....#..............##.....##...",
    ".....#...............#######....",
    "......#...............#.........",
    "......##.............##.........",
    "........###.......###...........",
    ".......##.##########.#..........",
    "......#...#........#..#.........",
    "......#..#..........#..#........",
    "....##..#............#..#.......",
    "...#....#............#...#......",
    ".......#..............#...#.....",
    "................................",
    "................................",
]);

pub(crate) static DOWN_RIGHT2: SpriteBits = sprite_bits([
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    ".....................#.....#....",
    "...#.................##....#....",
    "..##.................###..##....",
    "..#..................#.#.#.##...",
    "..#..................########...",
    "..#.................##.....##...",
    "...#......###########.......##..",
    "...##...###.......##......#..#..",
    "....#.##...........#......#..#..",
    ".....##............#.........###",
    ".....#.............##......###..",
    ".....#..............##.....##...",
    ".....#...............#######....",
    "......#...............#.........",
    "......##.............##.........",
    "........###.......###...........",
    ".........##########.#...........",
    "..........#.#....#.#............",
    "..........####...#.#............",
    "...........#.#...#.#............",
    "............#.#.#.#.............",
    "............#.#.#.#.............",
    "................................",
    "................................",
]);

pub(crate) static CLAW_LEFT1: SpriteBits = sprite_bits([
    "............#.........#.........",
    "............###......##.........",
    "............#.##....#.#.........",
    ".............#.#####.#..........",
    ".............##.....##..........",
    "............#.........#.........",
    "...........##.........##........",
    ".##........#...........#........",
    "..##.......#..##...##..#........",
    ".######....#...........#........",
    "..##...######....#....##........",
    ".##.........#.........#.........",
    ".............##.....##..........",
    ".##............#####.##.........",
    "..##...........##.....##........",
    ".######........#.......#........",
    "..##...######..#.......#........",
    ".##..........####.......#.......",
    "..............#.........#.......",
    "..............#.........#.......",
    "..............#.........#.......",
    "..............#.........#.......",
    "..............#.........#.......",
    "..............#.........#.......",
    "...............#.......#........",
    "...............#.......#........",
    "...............##.....##........",
    "................##...##.........",
    ".................######.........",
    ".................#....#.........",
    "................#.....##........",
    "................#.....#.#####...",
]);

pub(crate) static CLAW_LEFT2: SpriteBits = sprite_bits([
    "............#.........#.........",
    "............###......##.........",
    "............#.##....#.#.........",
    ".............#.#####.#..........",
    ".............##.....##..........",
    "............#.........#.........",
    "...........##.........##........",
    "...........#...........#........",
    "...........#..##...##..#........",
    "...........#...........#........",
    ".##........##....#....##........",
    "..##........#.........#.........",
    ".######......##.....##..........",
    "..##...######..#####.##.........",
    ".##..........####.....##........",
    "...............#.......#........",
    ".##............#.......#........",
    "..##..........#.........#.......",
    ".######.......#.........#.......",
    "..##...######.#.........#.......",
    ".##..........####.......#.......",
    "..............#.........#.......",
    "..............#.........#.......",
    "..............#.........#.......",
    "...............#.......#........",
    "...............#.......#........",
    "...............##.....##........",
    "................##...##.........",
    ".................######.........",
    ".................#....#.........",
    "................#.....##........",
    "................#.....#.#####...",
]);

pub(crate) static CLAW_RIGHT1: SpriteBits = sprite_bits([
    ".........#.........#............",
    ".........##......###............",
    ".........#.#....##.#............",
    "..........#.#####.#.............",
    "..........##.....##.............",
    ".........#.........#............",
    "........##.........##...........",
    "........#...........#........##.",
    "........#..##...##..#.......##..",
    "........#...........#....######.",
    "........##....#....######...##..",
    ".........#.........#.........##.",
    "..........##.....##.............",
    ".........##.#####............##.",
    "........##.....##...........##..",
    "........#.......#........######.",
    "........#.......#..######...##..",
    ".......#.......####..........##.",
    ".......#.........#..............",
    ".......#.........#..............",
    ".......#.........#..............",
    ".......#.........#..............",
    ".......#.........#..............",
    ".......#.........#..............",
    "........#.......#...............",
    "........#.......#...............",
    "........##.....##...............",
    ".........##...##................",
    ".........######.................",
    ".........#....#.................",
    "........##.....#................",
    "...#####.#.....#................",
]);

pub(crate) static CLAW_RIGHT2: SpriteBits = sprite_bits([
    ".........#.........#............",
    ".........##......###............",
    ".........#.#....##.#............",
    "..........#.#####.#.............",
    "..........##.....##.............",
    ".........#.........#............",
    "........##.........##...........",
    "........#...........#...........",
    "........#..##...##..#...........",
    "........#...........#...........",
    "........##....#....##........##.",
    ".........#.........#........##..",
    "..........##.....##......######.",
    ".........##.#####..######...##..",
    "........##.....####..........##.",
    "........#.......#...............",
    "........#.......#............##.",
    ".......#.........#..........##..",
    ".......#.........#.......######.",
    ".......#.........#.######...##..",
    ".......#.......####..........##.",
    ".......#.........#..............",
    ".......#.........#..............",
    ".......#.........#..............",
    "........#.......#...............",
    "........#.......#...............",
    "........##.....##...............",
    ".........##...##................",
    ".........######.................",
    ".........#....#.................",
    "........##.....#................",
    "...#####.#.....#................",
]);

pub(crate) static CLAW_UP1: SpriteBits = sprite_bits([
    "................................",
    "........#.#.....................",
    "........###.....................",
    ".........#......................",
    ".........#............#.#.......",
    ".........#.#.........####.......",
    ".........#.###.....###.#........",
    "..........##.##...##.#.#........",
    "..........#.#########..#........",
    "..........#.##.....##.#.........",
    "..........###.......###.........",
    "..........##.........##.........",
    "..........##.........##.........",
    "...........#.........##.........",
    "...........##.......##..........",
    "...........###.....###..........",
    "...........#.#######.#..........",
    "...........#.........#..........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "...........#.........#..........",
    "...........#.........#..........",
    "............#.......#...........",
    "............###...###...........",
    "..............#####.............",
    ".................##.............",
    "............#.....#.#...........",
    "............#.....#.#...........",
    "............#......##...........",
]);

pub(crate) static CLAW_UP2: SpriteBits = sprite_bits([
    "................................",
    "......................#.#.......",
    "......................###.......",
    ".......................#........",
    "........#.#............#........",
    "........####.........#.#........",
    ".........#.###.....###.#........",
    ".........#.#.##...##.##.........",
    ".........#..#########.#.........",
    "..........#.##.....##.#.........",
    "..........###.......###.........",
    "..........##.........##.........",
    "..........##.........##.........",
    "..........##.........#..........",
    "...........##.......##..........",
    "...........###.....###..........",
    "...........#.#######.#..........",
    "...........#.........#..........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "...........#.........#..........",
    "...........#.........#..........",
    "............#.......#...........",
    "............###...###...........",
    "..............#####.............",
    ".................##.............",
    "............#.....#.#...........",
    "............#.....#.#...........",
    "............#......##...........",
]);

pub(crate) static CLAW_DOWN1: SpriteBits = sprite_bits([
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........#..#.....#..#.........",
    "..........#...#.#.#...#.........",
    "..........#.#########.#.........",
    "..........###.......###.........",
    "..........#...........#.........",
    ".........##...........##........",
    ".........#..###...###..#........",
    "......####.............####.....",
    ".........###....#....###........",
    "........####...###...####.......",
    "......###.#...........#.###.....",
    "...........##.......##..........",
    "...........###########..........",
    "..........#.....#.....#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "...........##.......##..........",
    "............##.....##...........",
    "............#########...........",
    "............#.#.#.#.##..........",
    "...........##.#...#..#..........",
    "...........#..#...#..#..........",
    "...........#........###.........",
    "...........#........#.#.........",
    "...........#....................",
    "..........###...................",
    "..........#.#...................",
]);

pub(crate) static CLAW_DOWN2: SpriteBits = sprite_bits([
    "..........#...........#.........",
    "..........##.........##.........",
    "..........#.#.......#.#.........",
    "..........#..#.....#..#.........",
    "..........#...#.#.#...#.........",
    "..........#.#########.#.........",
    "..........###.......###.........",
    "..........#...........#.........",
    ".........##...........##........",
    ".........#..###...###..#........",
    "......####.............####.....",
    ".........###....#....###........",
    "........####...###...####.......",
    "......###.#...........#.###.....",
    "...........##.......##..........",
    "...........###########..........",
    "..........#.....#.....#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "..........#...........#.........",
    "...........##.......##..........",
    "............##.....##...........",
    "............#########...........",
    "...........##.#.#.#.#...........",
    "...........#..#...#.##..........",
    "...........#..#...#..#..........",
    "..........###........#..........",
    "..........#.#........#..........",
    ".....................#..........",
    "....................###.........",
    "....................#.#.........",
]);
