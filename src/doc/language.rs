/*!
# The FPL Language

An FPL flight plan is a text file of lines. Each line is blank, a
comment, a label definition, or a single instruction. A `#` starts a
comment that runs to the end of the line and may follow an instruction
on the same line. Tokens are case sensitive and separated by blanks or
tabs.

```text
# climb to altitude then circle twice
int laps 2
int height 60
    cmd <initialize>
    cmd <move 0 0 %height>
circle:
    cmd <move 40 0 0>
    cmd <move -40 40 0>
    cmd <move -40 -40 0>
    cmd <move 40 -40 0>
    sub laps 1
    cmp laps 0
    bne circle
    cmd <land>
    end
```

## Variables

Variables hold signed integers and are created by `int`, which also
sets the value. Names begin with an alphabetic character. Arithmetic
instructions overwrite their first operand; the second operand is a
constant or another variable.

```text
int x 10
add x 5      # x = 15
sub x x      # x = 0
set x -3
mul x 4      # x = -12
div x 2      # x = -6
```

Dividing by zero stops the program.

## Labels and branching

A label is a name followed by `:` on a line of its own and names the
next instruction. Branches may name a label before it is defined.
`cmp` records whether its two operands are equal; `beq` branches when
the last compare was equal, `bne` when it was not, and `bra` always.

## Drone commands

`cmd` sends the text between `<` and `>` to the selected drone target.
A `%name` inside the command is replaced with the named variable's
current value when the command executes, never earlier; an unknown name
becomes `0`. The `<initialize>` command connects the target the first
time it runs.

```text
int h 50
cmd <move 0 0 %h>    # sends: move 0 0 50
```

## Waiting

`nop` suspends the flight plan until a number of seconds, counted from
the start of execution, has passed. It is a deadline rather than a
delay: `nop 7` three seconds into the run waits four more seconds, and
does not wait at all if the deadline has already passed.

## Ending

`end` stops execution. Every flight plan needs one on each path, since
running past the last instruction is an error.
*/
