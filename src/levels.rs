/// The built-in 33 x 30 maze. `P` is the player spawn, `G` the ghosts.
pub const CLASSIC: &str = r#"
╭----------------------------╮
|.G...........||.............|
|.╭--╮.╭----╮.||.╭----╮.╭--╮.|
|o|  |.|    |.||.|    |.|  |o|
|.╰--╯.╰----╯.╰╯.╰----╯.╰--╯.|
|............................|
|.╭--╮.╭╮.╭--------╮.╭╮.╭--╮.|
|.╰--╯.||.╰--------╯.||.╰--╯.|
|......||............||......|
╰----╮.||            ||.╭----╯
     |.||            ||.|     
     |.||  ╭--==--╮  ||.|     
-----╯.||  |      |  ||.╰-----
      .    |      |    .      
-----╮.||  |   G  |  ||.╭-----
     |.||  |      |  ||.|     
     |.||  |  GG  |  ||.|     
╭----╯.||  ╰------╯  ||.╰----╮
|............................|
|.╭--╮.╭----╮.╭╮.╭----╮.╭--╮.|
|.╰-╮|.╰----╯.||.╰----╯.|╭-╯.|
|o..||........||........||..o|
╰-╮.||.╭╮.╭---╯╰---╮.╭╮.||.╭-╯
╭-╯.╰╯.||............||.╰╯.╰-╮
|......||......P.....||......|
|.╭----╯╰----╮..╭----╯╰----╮.|
|.╰----------╯..╰----------╯.|
|............................|
|.╭--╮.╭-----╮..╭-----╮.╭--╮.|
|.|  |.╰-----╯..╰-----╯.|  |.|
|o╰--╯..................╰--╯o|
|............................|
╰----------------------------╯
"#;

/// A small walled room.
pub const ROOM: &str = r#"
╭--------╮
|P.......|
|.╭--╮...|
|.|  |..G|
|.╰--╯...|
|....o...|
╰--------╯
"#;

pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        "classic" => Some(CLASSIC),
        "room" => Some(ROOM),
        _ => None,
    }
}
